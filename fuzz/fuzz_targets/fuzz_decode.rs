#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header-claimed DIB dimensions are untrusted; cap allocations
    let limits = zenico::Limits {
        max_pixels: Some(1024 * 1024),
        ..Default::default()
    };

    // Probe, best-fit decode and every entry must never panic
    let Ok(info) = zenico::IconInfo::from_bytes(data) else {
        return;
    };
    for target in [16, 256] {
        let _ = zenico::DecodeRequest::new(data)
            .with_limits(&limits)
            .decode(target, enough::Unstoppable);
    }
    // Default entry point has no caller limits
    for (target, scale) in [(16, false), (256, true)] {
        let _ = zenico::get_icon_by_size(data, target, scale);
    }
    for entry in &info.entries {
        let _ = zenico::DecodeRequest::new(data)
            .with_limits(&limits)
            .decode_entry(entry.index, enough::Unstoppable);
    }
});
