pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! Chart geometry, palette and network settings, organized by functional
    //! area. Pixel values describe the SVG coordinate space; the terminal
    //! renderer rescales them onto the available cells.

    // =============================================================================
    // DATASET
    // =============================================================================

    /// Dataset loaded when neither flag, environment nor config names a source.
    pub const DEFAULT_DATASET_URL: &str = "https://2u-data-curriculum-team.s3.amazonaws.com/dataviz-classroom/v1.1/14-Interactive-Web-Visualizations/02-Homework/samples.json";

    /// Environment variable that overrides the configured dataset source.
    pub const DATASET_SOURCE_ENV: &str = "OTU_DASHBOARD_SOURCE";

    // =============================================================================
    // BAR CHART
    // =============================================================================

    /// Horizontal bar chart of the most abundant taxa.
    pub mod bar {
        use crate::chart::Margin;

        /// Number of leading taxa shown as bars.
        pub const TOP_N: usize = 10;

        /// Full SVG canvas size.
        pub const CANVAS_WIDTH: f64 = 500.0;
        pub const CANVAS_HEIGHT: f64 = 400.0;

        pub const MARGIN: Margin = Margin {
            top: 20.0,
            right: 20.0,
            bottom: 40.0,
            left: 60.0,
        };

        /// Padding between bands, as a fraction of the band step.
        pub const BAND_PADDING: f64 = 0.1;

        pub const FILL: &str = "steelblue";
    }

    // =============================================================================
    // BUBBLE CHART
    // =============================================================================

    /// Bubble chart of every taxon in the sample.
    pub mod bubble {
        use crate::chart::Margin;

        /// Full SVG canvas size.
        pub const CANVAS_WIDTH: f64 = 1000.0;
        pub const CANVAS_HEIGHT: f64 = 1000.0;

        /// Plotting box the margins are subtracted from. Smaller than the
        /// canvas, which leaves room below the chart.
        pub const PLOT_WIDTH: f64 = 800.0;
        pub const PLOT_HEIGHT: f64 = 500.0;

        pub const MARGIN: Margin = Margin {
            top: 80.0,
            right: 20.0,
            bottom: 60.0,
            left: 60.0,
        };

        /// Radius range, in pixels, for the smallest and largest value.
        pub const MIN_RADIUS: f64 = 5.0;
        pub const MAX_RADIUS: f64 = 50.0;

        pub const OPACITY: f64 = 0.7;

        pub const X_LABEL: &str = "OTU IDs";
    }

    /// Approximate number of ticks requested from linear axes.
    pub const AXIS_TICK_COUNT: usize = 10;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Dataset download settings
    pub mod fetch {
        use std::time::Duration;

        /// Connect timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout (seconds). The dataset is a single static file.
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the connect timeout
        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
