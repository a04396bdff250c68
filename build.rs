use std::env;
use std::fs;
use std::path::PathBuf;

/// RP2350 memory layout used by the firmware demo
const MEMORY_X: &str = r#"MEMORY {
    FLASH : ORIGIN = 0x10000000, LENGTH = 4096K
    RAM : ORIGIN = 0x20000000, LENGTH = 512K
    SRAM8 : ORIGIN = 0x20080000, LENGTH = 4K
    SRAM9 : ORIGIN = 0x20081000, LENGTH = 4K
}

SECTIONS {
    .start_block : ALIGN(4)
    {
        __start_block_addr = .;
        KEEP(*(.start_block));
        KEEP(*(.boot_info));
    } > FLASH
} INSERT AFTER .vector_table;

_stext = ADDR(.start_block) + SIZEOF(.start_block);

SECTIONS {
    .bi_entries : ALIGN(4)
    {
        __bi_entries_start = .;
        KEEP(*(.bi_entries));
        . = ALIGN(4);
        __bi_entries_end = .;
    } > FLASH
} INSERT AFTER .text;

SECTIONS {
    .end_block : ALIGN(4)
    {
        __end_block_addr = .;
        KEEP(*(.end_block));
    } > FLASH
} INSERT AFTER .uninit;

PROVIDE(start_to_end = __end_block_addr - __start_block_addr);
PROVIDE(end_to_start = __start_block_addr - __end_block_addr);
"#;

fn main() {
    // Default blink timing (used when parameter storage has no LED entries)

    // LED on time in milliseconds
    if let Ok(on_ms) = env::var("LED_ON_MS") {
        println!("cargo:rustc-env=LED_ON_MS={}", on_ms);
        println!("cargo:warning=Using LED_ON_MS from environment: {}", on_ms);
    } else {
        println!("cargo:rustc-env=LED_ON_MS=500");
    }

    // LED off time in milliseconds
    if let Ok(off_ms) = env::var("LED_OFF_MS") {
        println!("cargo:rustc-env=LED_OFF_MS={}", off_ms);
        println!("cargo:warning=Using LED_OFF_MS from environment: {}", off_ms);
    } else {
        println!("cargo:rustc-env=LED_OFF_MS=500");
    }

    println!("cargo:rerun-if-env-changed=LED_ON_MS");
    println!("cargo:rerun-if-env-changed=LED_OFF_MS");

    // Linker script for firmware builds only
    if env::var_os("CARGO_FEATURE_PICO2_W").is_some() {
        let out = PathBuf::from(env::var("OUT_DIR").unwrap());
        fs::write(out.join("memory.x"), MEMORY_X).unwrap();
        println!("cargo:rustc-link-search={}", out.display());

        println!("cargo:rustc-link-arg-examples=--nmagic");
        println!("cargo:rustc-link-arg-examples=-Tlink.x");
        println!("cargo:rustc-link-arg-examples=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
