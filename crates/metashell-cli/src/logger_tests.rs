use log::LevelFilter;

use crate::logger::level_for;

#[test]
fn verbosity_levels() {
    assert_eq!(level_for(0), LevelFilter::Warn);
    assert_eq!(level_for(1), LevelFilter::Info);
    assert_eq!(level_for(2), LevelFilter::Debug);
    assert_eq!(level_for(3), LevelFilter::Trace);
    assert_eq!(level_for(9), LevelFilter::Trace);
}
