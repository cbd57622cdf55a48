#[macro_export]
macro_rules! trace_time {
    // $threshold_micros: Enter 500 for 0.5ms, 1000 for 1ms, etc.
    ($name:expr, $threshold_micros:expr, $block:block) => {{
        if $crate::config::DF.log_performance {
            let start = $crate::utils::AppInstant::now();
            let result = $block;
            let micros = start.elapsed().as_micros();
            if micros > $threshold_micros {
                log::warn!(
                    "🐢 SLOW '{}' took {:.3}ms (Threshold: {:.3}ms)",
                    $name,
                    micros as f64 / 1000.0,
                    $threshold_micros as f64 / 1000.0
                );
            }
            result
        } else {
            $block
        }
    }};
}
