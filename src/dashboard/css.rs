//! Dashboard CSS styles
//!
//! Styling for tiles, modal, plot switcher and the image overlay.
//! Uses CSS custom properties (variables) for theming.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #f4f6fa;
    --card: #ffffff;
    --border: #dde3ec;
    --text: #1f2933;
    --text-dim: #6b7785;
    --green: #1a7f37;
    --red: #cf222e;
    --blue: #2a5298;
    --energy: #d29922;
    --finance: #2a5298;
    --mining: #8250df;
    --other: #6b7785;
    --highlight: rgba(42, 82, 152, 0.05);
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    padding: 20px;
    min-height: 100vh;
}

.container { max-width: 1200px; margin: 0 auto; }

/* Header */
header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 24px;
    padding-bottom: 16px;
    border-bottom: 1px solid var(--border);
}

h1 { font-size: 24px; font-weight: 600; }
.subtitle { font-size: 13px; color: var(--text-dim); }
.header-controls { display: flex; gap: 12px; }

/* Buttons */
.btn, .plot-btn {
    padding: 8px 16px;
    border-radius: 6px;
    border: none;
    font-size: 13px;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.2s;
}

.btn-secondary, .plot-btn { background: var(--border); color: var(--text); }
.plot-btn.active { background: var(--blue); color: #fff; }

/* Feature cards */
.features {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 16px;
    margin-bottom: 24px;
}

.feature-item {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 16px;
    display: flex;
    gap: 12px;
    align-items: center;
}

.feature-item.clickable { cursor: pointer; }
.feature-item.clickable:hover { border-color: var(--blue); }

/* Cards and sections */
.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 20px;
    margin-bottom: 24px;
    transition: background-color 0.3s ease;
}

.card.highlight { background-color: var(--highlight); }

.card-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    flex-wrap: wrap;
    gap: 12px;
    margin-bottom: 16px;
}

.card-title {
    font-size: 14px;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.5px;
}

/* Plots */
.plot-controls { display: flex; gap: 8px; flex-wrap: wrap; }
.plot-image { display: none; width: 100%; border-radius: 8px; cursor: pointer; }
.plot-image.active { display: block; }

/* Tiles */
.tiles-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 16px;
}

.company-tile {
    position: relative;
    border: 1px solid var(--border);
    border-left: 4px solid var(--other);
    border-radius: 10px;
    padding: 16px;
    cursor: pointer;
    transition: transform 0.2s, box-shadow 0.2s;
}

.company-tile:hover { transform: translateY(-2px); box-shadow: 0 6px 18px rgba(0,0,0,0.08); }
.company-tile.energy { border-left-color: var(--energy); }
.company-tile.finance { border-left-color: var(--finance); }
.company-tile.mining { border-left-color: var(--mining); }

.category-badge {
    position: absolute;
    top: 12px;
    right: 12px;
    padding: 2px 8px;
    border-radius: 10px;
    font-size: 11px;
    font-weight: 600;
    color: #fff;
    background: var(--other);
}

.category-badge.energy { background: var(--energy); }
.category-badge.finance { background: var(--finance); }
.category-badge.mining { background: var(--mining); }

.company-name { font-size: 16px; margin-right: 70px; }
.company-symbol { font-size: 12px; color: var(--text-dim); }
.tile-stats { display: grid; grid-template-columns: 1fr 1fr; gap: 8px; margin-top: 12px; }
.tile-stat { display: flex; flex-direction: column; }
.tile-stat-label { font-size: 11px; color: var(--text-dim); text-transform: uppercase; }
.tile-stat-value { font-size: 15px; font-weight: 600; }

.loading { padding: 24px; text-align: center; color: var(--text-dim); }

/* Colors */
.positive { color: var(--green); }
.negative { color: var(--red); }
.neutral { color: var(--text-dim); }

/* Modal */
.modal {
    display: none;
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    z-index: 1000;
    overflow-y: auto;
}

.modal-content {
    position: relative;
    background: var(--card);
    max-width: 900px;
    margin: 5vh auto;
    border-radius: 12px;
    padding: 24px;
}

.modal-close {
    position: absolute;
    top: 12px;
    right: 16px;
    border: none;
    background: none;
    font-size: 28px;
    cursor: pointer;
}

.modal-plot { width: 100%; margin: 16px 0; border-radius: 8px; cursor: pointer; }
.modal-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; }
.stat { display: flex; flex-direction: column; }
.stat-label { font-size: 11px; color: var(--text-dim); text-transform: uppercase; }

/* Full-screen image overlay */
.image-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.95);
    z-index: 2000;
    display: flex;
    align-items: center;
    justify-content: center;
    backdrop-filter: blur(5px);
    cursor: pointer;
}

.overlay-close {
    position: absolute;
    top: 20px;
    right: 30px;
    width: 40px;
    height: 40px;
    border: none;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.9);
    color: #333;
    font-size: 24px;
    font-weight: bold;
    cursor: pointer;
    z-index: 2001;
    transition: all 0.3s ease;
    box-shadow: 0 2px 10px rgba(0,0,0,0.3);
}

.overlay-close:hover { background: #fff; transform: scale(1.1); }

.overlay-content { max-width: 95%; max-height: 95%; text-align: center; cursor: default; }

.overlay-title {
    color: white;
    margin-bottom: 1rem;
    font-size: 1.5rem;
    text-shadow: 0 2px 4px rgba(0,0,0,0.5);
}

.overlay-image {
    max-width: 100%;
    max-height: 80vh;
    border-radius: 8px;
    box-shadow: 0 10px 40px rgba(0,0,0,0.5);
}

.overlay-instruction { color: #ccc; margin-top: 1rem; font-size: 0.9rem; }
";
