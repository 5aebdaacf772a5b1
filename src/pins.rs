//! Pin assignments for the ESP32-S3 soundbar board.
//!
//! Single source of truth for the GPIO map.  Changing a pin here is the
//! only edit required to re-route a signal.

/// Sound sensor analog output → ADC1 channel 3 (GPIO4).
pub const ADC1_CH_SOUND: u32 = 3;
/// Sensitivity potentiometer wiper → ADC1 channel 4 (GPIO5).
pub const ADC1_CH_POT: u32 = 4;

/// Bar LEDs, index 0 first.  One LEDC channel per LED.
pub const LED_GPIOS: [i32; 6] = [8, 9, 10, 11, 12, 13];

/// Piezo buzzer (LEDC tone output).
pub const BUZZER_GPIO: i32 = 7;

/// I2C bus shared by the DS3231 RTC and the LCD backpack.
pub const I2C_SDA_GPIO: i32 = 1;
pub const I2C_SCL_GPIO: i32 = 2;

/// DS3231 RTC I2C address.
pub const RTC_I2C_ADDR: u8 = 0x68;
/// PCF8574 LCD backpack I2C address (some boards use 0x3F).
pub const LCD_I2C_ADDR: u8 = 0x27;

/// LED PWM frequency (Hz).
pub const LED_PWM_FREQ_HZ: u32 = 1_000;
