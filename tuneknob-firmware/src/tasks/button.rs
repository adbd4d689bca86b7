//! Button edge counting
//!
//! One task instance per button. Each rising edge bumps that button's
//! press counter; classification happens in the dispatch task.

use defmt::*;
use embassy_rp::gpio::Input;

use tuneknob_core::input::Button;

use crate::channels::INPUTS;

/// Button task - counts press edges for `button`
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut pin: Input<'static>, button: Button) {
    info!("Button task started: {:?}", button);

    let presses = INPUTS.presses(button);

    loop {
        pin.wait_for_rising_edge().await;
        presses.record_press();
        trace!("{:?} press #{}", button, presses.count());
    }
}
