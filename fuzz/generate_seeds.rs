#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn ico(entries: &[(u8, &[u8])]) -> Vec<u8> {
    let mut out = vec![0, 0, 1, 0];
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    let mut offset = 6 + 16 * entries.len() as u32;
    for (size, payload) in entries {
        out.extend_from_slice(&[*size, *size, 0, 0, 1, 0, 32, 0]);
        out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        out.extend_from_slice(&offset.to_le_bytes());
        offset += payload.len() as u32;
    }
    for (_, payload) in entries {
        out.extend_from_slice(payload);
    }
    out
}

fn dib_2x2() -> Vec<u8> {
    let mut dib = vec![0u8; 40];
    dib[0..4].copy_from_slice(&40u32.to_le_bytes()); // header size
    dib[4..8].copy_from_slice(&2i32.to_le_bytes()); // width
    dib[8..12].copy_from_slice(&4i32.to_le_bytes()); // doubled height
    dib[12..14].copy_from_slice(&1u16.to_le_bytes()); // planes
    dib[14..16].copy_from_slice(&32u16.to_le_bytes()); // bpp
    dib.extend_from_slice(&[0x00, 0x00, 0xff, 0xff].repeat(4)); // BGRA red
    dib.extend_from_slice(&[0u8; 8]); // AND mask
    dib
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    let dib = dib_2x2();
    fs::write(format!("{dir}/dib_2x2.ico"), ico(&[(2, &dib[..])])).unwrap();
    fs::write(format!("{dir}/dib_two_entries.ico"), ico(&[(2, &dib[..]), (2, &dib[..])])).unwrap();

    // PNG signature followed by junk, so the PNG path gets exercised
    let png = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR";
    fs::write(format!("{dir}/png_stub.ico"), ico(&[(0, &png[..])])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/zero_count.ico"), b"\x00\x00\x01\x00\x00\x00").unwrap();
    fs::write(format!("{dir}/short_dir.ico"), b"\x00\x00\x01\x00\x02\x00\x10\x10").unwrap();

    println!("Generated seed corpus in {dir}/");
}
