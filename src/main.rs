//! Soundbar Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single fixed-cadence control loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  HardwareAdapter                  LogEventSink           │
//! │  (Clock+Analog+Output+Display)    (EventSink)            │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ─────────────         │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │           MeterService (pure logic)                │  │
//! │  │  window · sensitivity · level · render · present   │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{info, warn};

use soundbar::adapters::hardware::HardwareAdapter;
use soundbar::adapters::log_sink::LogEventSink;
use soundbar::app::service::MeterService;
use soundbar::config::MeterConfig;
use soundbar::control::status::banner;
use soundbar::drivers::analog::AnalogInputs;
use soundbar::drivers::buzzer::Buzzer;
use soundbar::drivers::hw_init;
use soundbar::drivers::lcd::Lcd;
use soundbar::drivers::led_bar::LedBar;
use soundbar::drivers::rtc::Ds3231;
use soundbar::error::Error;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Soundbar v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration (process-start constants) ────────────
    let config = MeterConfig::default();
    config.validate()?;

    // ── 3. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", Error::from(e));
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 4. Construct drivers and adapters ─────────────────────
    let rtc = Ds3231::new();
    let adc = AnalogInputs::new(config.adc_max);
    let bar = LedBar::new();
    let buzzer = Buzzer::new(config.alert_tone_hz);
    let mut lcd = Lcd::new();
    if let Err(e) = lcd.init() {
        // A dead LCD is not fatal — the bar and buzzer still work.
        warn!("LCD init failed ({}), continuing without display", e);
    }

    let mut hw = HardwareAdapter::new(rtc, adc, bar, buzzer, lcd);
    let mut sink = LogEventSink::new();

    // Startup banner, then hand the screen to the presenter.
    if let Err(e) = hw.lcd_mut().write_lines(&banner()) {
        warn!("banner write failed: {}", e);
    }
    esp_idf_svc::hal::delay::FreeRtos::delay_ms(1200);

    // ── 5. Construct the service ──────────────────────────────
    let mut service = MeterService::new(config.clone());
    service.start(&mut hw, &mut sink);

    info!("System ready. Entering control loop.");

    // ── 6. Control loop ───────────────────────────────────────
    loop {
        service.tick(&mut hw, &mut sink);
        esp_idf_svc::hal::delay::FreeRtos::delay_ms(config.loop_interval_ms);
    }
}
