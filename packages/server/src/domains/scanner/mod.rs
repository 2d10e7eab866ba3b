pub mod scan;

pub use scan::{MarkerScan, ScanError, BLOCK_SIGNATURE, SCAN_PAGE_SIZE};
