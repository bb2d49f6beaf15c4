//! Repmate - Exercise Rep Counter Firmware
//!
//! Main firmware binary for the UNIHIKER K10 (ESP32-S3) classroom board.
//! Polls the board's motion detection module at a fixed cadence, validates
//! repetitions against plausible-duration bounds, and mirrors progress on
//! the onboard screen and RGB status LED.

#![no_std]
#![no_main]

use core::cell::RefCell;

use display_interface_spi::SPIInterface;
use embassy_embedded_hal::shared_bus::blocking::spi::SpiDevice;
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::NoopMutex;
use embassy_time::Timer;
use esp_backtrace as _;
use esp_hal::{
    clock::ClockControl,
    gpio::{Io, Level, Output, NO_PIN},
    peripherals::{Peripherals, SPI2},
    prelude::*,
    spi::{master::Spi, FullDuplexMode, SpiMode},
    system::SystemControl,
    timer::timg::TimerGroup,
};
use log::{info, warn};
use mipidsi::{
    models::ST7789,
    options::{ColorInversion, Orientation, Rotation},
    Builder,
};
use static_cell::StaticCell;

use repmate_core::counter::Observation;
use repmate_core::status::Rgb;

use crate::channels::{LED_COLOR, SNAPSHOT};
use crate::screen::StatusScreen;

mod channels;
mod screen;
mod tasks;

/// Main entry point
#[main]
async fn main(spawner: Spawner) {
    let peripherals = Peripherals::take();
    let system = SystemControl::new(peripherals.SYSTEM);
    let clocks = ClockControl::boot_defaults(system.clock_control).freeze();

    esp_println::logger::init_logger_from_env();
    info!("Repmate firmware starting...");

    // Initialize the TIMG0 peripheral, then Embassy
    let timg0 = TimerGroup::new(peripherals.TIMG0, &clocks);
    esp_hal_embassy::init(&clocks, timg0.timer0);
    info!("Embassy initialized");

    let io = Io::new(peripherals.GPIO, peripherals.IO_MUX);

    // Pin assignments are board-specific (K10 LCD: SCK=GPIO12, MOSI=GPIO11,
    // CS=GPIO10, DC=GPIO9, RST=GPIO8, backlight=GPIO14)
    let sclk = io.pins.gpio12;
    let mosi = io.pins.gpio11;
    let miso = io.pins.gpio13;
    let cs = io.pins.gpio10;
    let dc = io.pins.gpio9;
    let rst = io.pins.gpio8;
    let mut backlight = Output::new(io.pins.gpio14, Level::Low);

    // ST7789 datasheet limit is 62.5MHz, 40MHz leaves margin
    let spi = Spi::new(peripherals.SPI2, 40.MHz(), SpiMode::Mode0, &clocks).with_pins(
        Some(sclk),
        Some(mosi),
        Some(miso),
        NO_PIN,
    );

    static DISP_SPI_BUS: StaticCell<NoopMutex<RefCell<Spi<SPI2, FullDuplexMode>>>> =
        StaticCell::new();
    let spi_bus = DISP_SPI_BUS.init(NoopMutex::new(RefCell::new(spi)));

    let di = SPIInterface::new(
        SpiDevice::new(spi_bus, Output::new(cs, Level::Low)),
        Output::new(dc, Level::Low),
    );
    let mut display = Builder::new(ST7789, di)
        .display_size(240, 320)
        .orientation(Orientation {
            rotation: Rotation::Deg90,
            mirrored: false,
        })
        .invert_colors(ColorInversion::Inverted)
        .reset_pin(Output::new(rst, Level::High))
        .init(&mut embassy_time::Delay)
        .unwrap();
    info!("Display initialized");

    // Status LED lights blue as soon as the board is up
    LED_COLOR.signal(Rgb::BLUE);

    // Spawn tasks
    // Pin assignments are board-specific (K10 RGB LED: GPIO38/39/40,
    // motion detect line: GPIO42)
    spawner
        .spawn(tasks::indicator_task(
            io.pins.gpio38,
            io.pins.gpio39,
            io.pins.gpio40,
        ))
        .unwrap();
    spawner.spawn(tasks::sampler_task(io.pins.gpio42)).unwrap();
    info!("All tasks spawned, firmware running");

    let mut screen = StatusScreen::new();
    screen.draw_boot(&mut display).unwrap();
    backlight.set_high();

    // Leave the splash up briefly, then switch to the counter screen.
    // The sampler is already counting underneath.
    Timer::after_millis(1500).await;
    screen.draw_status(&mut display, &Observation::default()).unwrap();

    loop {
        let snapshot = SNAPSHOT.wait().await;
        if let Err(e) = screen.draw_status(&mut display, &snapshot) {
            warn!("Display write failed: {:?}", e);
        }
    }
}
