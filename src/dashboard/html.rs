//! Dashboard HTML template
//!
//! Body of the host page. Contains every element the WASM module reads or
//! writes:
//! - Header navigation and feature cards (`data-action`)
//! - Combined trends section with plot switcher (`data-plot`)
//! - Company tiles container
//! - Company detail modal

pub const TEMPLATE: &str = r#"
    <div class="container">
        <header>
            <div>
                <h1>🇦🇺 Australian Stock Portfolio</h1>
                <span class="subtitle">Major banks, miners &amp; energy companies on the ASX</span>
            </div>
            <nav class="header-controls">
                <button class="btn btn-secondary" data-section="combined-trends">Trends</button>
                <button class="btn btn-secondary" data-section="companies">Companies</button>
            </nav>
        </header>

        <section class="features">
            <div class="feature-item clickable" data-action="trends">
                <span class="feature-icon">📈</span>
                <span class="feature-title">View Stock Trends</span>
            </div>
            <div class="feature-item clickable" data-action="performance">
                <span class="feature-icon">💹</span>
                <span class="feature-title">Market Performance</span>
            </div>
            <div class="feature-item clickable" data-action="companies">
                <span class="feature-icon">🏢</span>
                <span class="feature-title">Company Analysis</span>
            </div>
            <div class="feature-item clickable" data-action="sectors">
                <span class="feature-icon">🏭</span>
                <span class="feature-title">Sector Overview</span>
            </div>
        </section>

        <section id="combined-trends" class="card">
            <div class="card-header">
                <h2 class="card-title">Combined Trends</h2>
                <div class="plot-controls">
                    <button class="plot-btn active" data-plot="stock-trends">Price Trends</button>
                    <button class="plot-btn" data-plot="stock-trends-ma">Prices + Moving Average</button>
                    <button class="plot-btn" data-plot="fortnightly-ma">Fortnightly MA</button>
                    <button class="btn btn-secondary" id="plot-cycle">Next ↻</button>
                </div>
            </div>
            <img id="stock-trends-plot" class="plot-image active" src="plots/stock_trends.png" alt="Stock price trends">
            <img id="stock-trends-ma-plot" class="plot-image" src="plots/stock_trends_with_ma.png" alt="Stock prices with moving average">
            <img id="fortnightly-ma-plot" class="plot-image" src="plots/fortnightly_moving_average.png" alt="Fortnightly moving average">
        </section>

        <section id="companies" class="card">
            <div class="card-header">
                <h2 class="card-title">Companies</h2>
            </div>
            <div id="company-tiles" class="tiles-grid">
                <div class="loading">Loading company data...</div>
            </div>
        </section>
    </div>

    <div id="company-modal" class="modal">
        <div class="modal-content">
            <button id="modal-close" class="modal-close" aria-label="Close">&times;</button>
            <h2 id="modal-company-name"></h2>
            <img id="modal-plot" class="modal-plot" src="" alt="">
            <div class="modal-stats">
                <div class="stat"><span class="stat-label">Latest</span><span id="modal-latest" class="stat-value"></span></div>
                <div class="stat"><span class="stat-label">Average</span><span id="modal-mean" class="stat-value"></span></div>
                <div class="stat"><span class="stat-label">Low</span><span id="modal-min" class="stat-value"></span></div>
                <div class="stat"><span class="stat-label">High</span><span id="modal-max" class="stat-value"></span></div>
                <div class="stat"><span class="stat-label">Volatility</span><span id="modal-sd" class="stat-value"></span></div>
                <div class="stat"><span class="stat-label">vs Average</span><span id="modal-performance" class="stat-value"></span></div>
            </div>
        </div>
    </div>
"#;
