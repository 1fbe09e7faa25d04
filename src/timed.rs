/// Run a closure, logging when it starts and finishes along with how long it took.
///
/// `timed!(|| load(path), "Reading weather data from {}", path)`
#[macro_export]
macro_rules! timed {
    ($closure:expr, $($fmt:tt)+) => {{
        let msg = format!($($fmt)+);

        let start_time = ::std::time::Instant::now();
        ::log::info!("Start: {}", msg);

        let out = $closure();

        ::log::info!("End:   {}: {:?}", msg, start_time.elapsed());

        out
    }};
}
