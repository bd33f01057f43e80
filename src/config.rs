// Shared tuning constants.
pub const HEIGHT_MARGIN: u16 = 2; // rows held back from the probe so the board sits off the terminal edge
pub const MIN_BOARD_DIM: u16 = 3; // smallest board with a full border ring plus one open cell
pub const INPUT_POLL_MS: u64 = 50;
pub const DRIFT_TICK_MS: u64 = 1000; // one teleport per second in drift mode
