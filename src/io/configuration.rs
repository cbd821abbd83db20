//! Canvas constants, parameter ranges and runtime defaults

// Canvas geometry shared by every pattern
/// Width and height of the square canvas
pub const CANVAS_SIZE: f64 = 700.0;
/// Margin between the canvas edge and the guide lattice
pub const CANVAS_PADDING: f64 = 50.0;

// Guide lattice rendering
/// Opacity of the guide dots
pub const GUIDE_DOT_OPACITY: f64 = 0.08;
/// Smallest guide dot radius
pub const MIN_GUIDE_DOT_RADIUS: f64 = 0.8;
/// Guide dot radius as a fraction of the cell size (`cell / divisor`)
pub const GUIDE_DOT_RADIUS_DIVISOR: f64 = 25.0;

// Request bounds enforced by the generator form
/// Smallest grid dimension
pub const MIN_GRID_SIZE: u32 = 3;
/// Largest grid dimension
pub const MAX_GRID_SIZE: u32 = 12;
/// Lowest complexity level
pub const MIN_COMPLEXITY: u32 = 1;
/// Highest complexity level
pub const MAX_COMPLEXITY: u32 = 5;

// Default values for configurable parameters
/// Grid dimension used when none is given
pub const DEFAULT_GRID_SIZE: u32 = 5;
/// Complexity level used when none is given
pub const DEFAULT_COMPLEXITY: u32 = 3;
/// Directory exports are written to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = ".";

// Styling pass
/// Stroke width of the first path in each cycle of four
pub const MAX_STROKE_WIDTH: f64 = 4.5;
/// Stroke width reduction per step in the cycle
pub const STROKE_WIDTH_STEP: f64 = 0.5;
/// Stroke width floor
pub const MIN_STROKE_WIDTH: f64 = 2.0;
/// Opacity of every decorative path
pub const PATH_OPACITY: f64 = 0.95;

// Metadata derivation
/// Drawing minutes estimated per dot per complexity level
pub const MINUTES_PER_DOT_LEVEL: f64 = 0.3;

// Output settings
/// Filename prefix for exported patterns
pub const EXPORT_PREFIX: &str = "kolam-pattern";
/// Extension for exported patterns
pub const EXPORT_EXTENSION: &str = "svg";
/// Number of alternative filenames tried when an export name is taken
pub const MAX_EXPORT_ATTEMPTS: u32 = 100;

// Upload handling
/// Largest accepted upload in bytes
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
