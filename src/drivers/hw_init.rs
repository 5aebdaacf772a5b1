//! One-shot hardware peripheral initialization.
//!
//! Configures the ADC channels, LEDC timers/channels for the bar LEDs and
//! buzzer, and the shared I2C bus (RTC + LCD) using raw ESP-IDF sys calls.
//! Called once from `main()` before the control loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    LedcInitFailed,
    I2cInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc) => write!(f, "ADC1 init failed (rc={})", rc),
            Self::LedcInitFailed => write!(f, "LEDC timer/channel config failed"),
            Self::I2cInitFailed(rc) => write!(f, "I2C master init failed (rc={})", rc),
        }
    }
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the control loop; single-threaded.
    unsafe {
        init_adc()?;
        init_ledc();
        init_i2c()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// main-loop ADC read path.  `init_adc()` completes before the loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::AdcInitFailed(ret));
    }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    for ch in [pins::ADC1_CH_SOUND, pins::ADC1_CH_POT] {
        let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), ch, &chan_cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::AdcInitFailed(ret));
        }
    }

    info!(
        "hw_init: ADC1 configured (CH{}=sound, CH{}=pot)",
        pins::ADC1_CH_SOUND,
        pins::ADC1_CH_POT
    );
    Ok(())
}

/// Read one raw 12-bit sample.  Returns `None` on a driver error so the
/// caller can surface a typed sensor fault instead of a silent zero.
#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> Option<u16> {
    let mut raw: i32 = 0;
    // SAFETY: ADC1_HANDLE is written once during init_adc() before this is
    // called; single-threaded main-loop access guaranteed.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return None;
    }
    Some(raw.max(0) as u16)
}

#[cfg(not(target_os = "espidf"))]
pub fn adc1_read(_channel: u32) -> Option<u16> {
    Some(0)
}

// ── LEDC PWM (bar LEDs + buzzer) ──────────────────────────────

/// LEDC channels 0..=5 drive the bar LEDs; channel 6 drives the buzzer.
pub const LEDC_CH_BUZZER: u32 = pins::LED_GPIOS.len() as u32;

#[cfg(target_os = "espidf")]
unsafe fn init_ledc() {
    // Timer 0: bar LEDs (1 kHz, 8-bit)
    // SAFETY: Called from single main-task context via init_peripherals().
    let timer0 = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
        freq_hz: pins::LED_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    unsafe {
        ledc_timer_config(&timer0);
    }

    // Timer 1: buzzer tone (frequency set at runtime by the driver, 8-bit)
    let timer1 = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_1,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
        freq_hz: 1_000,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    unsafe {
        ledc_timer_config(&timer1);
    }

    // Channels 0..=5: one per bar LED
    for (i, &gpio) in pins::LED_GPIOS.iter().enumerate() {
        unsafe {
            ledc_channel_config(&ledc_channel_config_t {
                speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
                channel: i as u32,
                timer_sel: ledc_timer_t_LEDC_TIMER_0,
                gpio_num: gpio,
                duty: 0,
                hpoint: 0,
                ..Default::default()
            });
        }
    }

    // Channel 6: buzzer
    unsafe {
        ledc_channel_config(&ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel: LEDC_CH_BUZZER,
            timer_sel: ledc_timer_t_LEDC_TIMER_1,
            gpio_num: pins::BUZZER_GPIO,
            duty: 0,
            hpoint: 0,
            ..Default::default()
        });
    }

    info!("hw_init: LEDC configured (bar=CH0-5, buzzer=CH6)");
}

/// Set an LEDC channel duty.  Returns `false` on a driver error.
#[cfg(target_os = "espidf")]
pub fn ledc_set(channel: u32, duty: u8) -> bool {
    // SAFETY: LEDC channels were configured in init_ledc(); duty register
    // writes are race-free since only the main loop calls this function.
    unsafe {
        if ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, duty as u32) != ESP_OK as i32 {
            return false;
        }
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel) == ESP_OK as i32
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set(_channel: u32, _duty: u8) -> bool {
    true
}

/// Retune the buzzer timer to `freq_hz` (tone pitch).
#[cfg(target_os = "espidf")]
pub fn ledc_set_tone_freq(freq_hz: u32) {
    // SAFETY: Timer 1 was configured in init_ledc(); main-loop only.
    unsafe {
        ledc_set_freq(
            ledc_mode_t_LEDC_LOW_SPEED_MODE,
            ledc_timer_t_LEDC_TIMER_1,
            freq_hz,
        );
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set_tone_freq(_freq_hz: u32) {}

// ── I2C master (RTC + LCD) ────────────────────────────────────

#[cfg(target_os = "espidf")]
const I2C_PORT: i32 = 0;
#[cfg(target_os = "espidf")]
const I2C_TIMEOUT_MS: u32 = 50;

#[cfg(target_os = "espidf")]
unsafe fn init_i2c() -> Result<(), HwInitError> {
    let cfg = i2c_config_t {
        mode: i2c_mode_t_I2C_MODE_MASTER,
        sda_io_num: pins::I2C_SDA_GPIO,
        scl_io_num: pins::I2C_SCL_GPIO,
        sda_pullup_en: true,
        scl_pullup_en: true,
        __bindgen_anon_1: i2c_config_t__bindgen_ty_1 {
            master: i2c_config_t__bindgen_ty_1__bindgen_ty_1 {
                clk_speed: 100_000,
            },
        },
        ..Default::default()
    };
    unsafe {
        let ret = i2c_param_config(I2C_PORT, &cfg);
        if ret != ESP_OK as i32 {
            return Err(HwInitError::I2cInitFailed(ret));
        }
        let ret = i2c_driver_install(I2C_PORT, i2c_mode_t_I2C_MODE_MASTER, 0, 0, 0);
        if ret != ESP_OK as i32 {
            return Err(HwInitError::I2cInitFailed(ret));
        }
    }
    info!("hw_init: I2C master configured (SDA={}, SCL={})", pins::I2C_SDA_GPIO, pins::I2C_SCL_GPIO);
    Ok(())
}

/// Write `data` to the device at `addr`.  `false` on NACK or bus error.
#[cfg(target_os = "espidf")]
pub fn i2c_write(addr: u8, data: &[u8]) -> bool {
    // SAFETY: I2C driver installed in init_i2c(); main-loop only.
    let ret = unsafe {
        i2c_master_write_to_device(
            I2C_PORT,
            addr,
            data.as_ptr(),
            data.len(),
            I2C_TIMEOUT_MS / portTICK_PERIOD_MS,
        )
    };
    ret == ESP_OK as i32
}

#[cfg(not(target_os = "espidf"))]
pub fn i2c_write(_addr: u8, _data: &[u8]) -> bool {
    true
}

/// Read `buf.len()` bytes starting at register `reg` of device `addr`.
#[cfg(target_os = "espidf")]
pub fn i2c_read_reg(addr: u8, reg: u8, buf: &mut [u8]) -> bool {
    // SAFETY: I2C driver installed in init_i2c(); main-loop only.
    let ret = unsafe {
        i2c_master_write_read_device(
            I2C_PORT,
            addr,
            &reg,
            1,
            buf.as_mut_ptr(),
            buf.len(),
            I2C_TIMEOUT_MS / portTICK_PERIOD_MS,
        )
    };
    ret == ESP_OK as i32
}

#[cfg(not(target_os = "espidf"))]
pub fn i2c_read_reg(_addr: u8, _reg: u8, _buf: &mut [u8]) -> bool {
    true
}
