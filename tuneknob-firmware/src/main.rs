//! Tuneknob - Handheld Media Remote Firmware
//!
//! Main firmware binary for RP2040-based remotes: a volume knob and two
//! gesture buttons, reporting to a host over a 5-byte framed UART link.
//!
//! Board wiring:
//!
//! | Signal | Pin |
//! |---|---|
//! | Host UART TX / RX | GPIO0 / GPIO1 (UART0) |
//! | Primary button (up / forward) | GPIO14, active-high |
//! | Secondary button (confirm / back) | GPIO15, active-high |
//! | Status LED (red, active-low) | GPIO16 |
//! | Volume potentiometer | GPIO26 (ADC0) |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tuneknob_core::input::Button;

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tuneknob firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();
    info!("Configuration: {:?}", config);

    // Host link, 8N1
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config.serial.baudrate;

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized at {} baud", config.serial.baudrate);

    let primary = Input::new(p.PIN_14, Pull::Down);
    let secondary = Input::new(p.PIN_15, Pull::Down);

    // LED off until the host reports playback
    let led = tasks::StatusLed::new(Output::new(p.PIN_16, Level::High));

    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let knob = Channel::new_pin(p.PIN_26, Pull::None);

    info!("GPIO and ADC initialized");

    let queues = channels::init_queues();

    spawner.spawn(unwrap!(tasks::tick_task()));
    spawner.spawn(unwrap!(tasks::button_task(primary, Button::Primary)));
    spawner.spawn(unwrap!(tasks::button_task(secondary, Button::Secondary)));
    spawner.spawn(unwrap!(tasks::serial_rx_task(rx, queues.rx_producer)));
    spawner.spawn(unwrap!(tasks::serial_tx_task(tx, queues.tx_consumer)));
    spawner.spawn(unwrap!(tasks::adc_task(
        adc,
        knob,
        config.volume.adc_poll_interval_ms
    )));
    spawner.spawn(unwrap!(tasks::dispatch_task(
        config,
        queues.rx_consumer,
        queues.tx_producer,
        led
    )));

    info!("All tasks spawned, firmware running");
}
