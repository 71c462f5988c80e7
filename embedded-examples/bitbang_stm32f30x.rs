//! Full example code for setting up an SSD1325 display on bit-banged GPIOs. This runs on an
//! STM32F303RE, with a 128x64 SSD1325 module wired for its 5-pin serial mode: PA5 to SCLK, PA7 to
//! SID, PA8 to D/C, PA9 to /RESET and PA10 to /CS.

#![deny(unsafe_code)]
#![no_main]
#![no_std]

extern crate cortex_m;
extern crate stm32f30x;
extern crate stm32f30x_hal as hal;
#[macro_use]
extern crate cortex_m_rt;
extern crate panic_abort;
extern crate ssd1325;

use cortex_m::asm;
use cortex_m_rt::ExceptionFrame;
use hal::prelude::*;
use ssd1325 as oled;

entry!(main);

exception!(*, default_handler);
exception!(HardFault, hard_fault);

fn hard_fault(_ef: &ExceptionFrame) -> ! {
    asm::bkpt();
    loop {}
}

fn default_handler(_irqn: i16) {
    loop {}
}

fn main() -> ! {
    // Get peripherals and set up RCC.
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = stm32f30x::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let mut delay = hal::delay::Delay::new(cp.SYST, clocks);

    // Get GPIO A where the display is connected. Every line is a plain push-pull output; the
    // driver toggles them itself.
    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb);
    let sclk = gpioa
        .pa5
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);
    let sid = gpioa
        .pa7
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);
    let dc = gpioa
        .pa8
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);
    let mut rst = gpioa
        .pa9
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);
    let cs = gpioa
        .pa10
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);

    // Create the bit-banged interface and the Display.
    let mut disp = oled::Display::new(oled::BitBangInterface::new(sclk, sid, dc, cs));

    // Pulse /RESET and load the default 128x64 module calibration.
    disp.begin(oled::Config::default(), &mut rst, &mut delay)
        .unwrap();

    // Draw a frame around the edge of the panel and show it.
    disp.clear();
    for x in 0..disp.width() {
        disp.draw_pixel(x, 0, oled::Color::On);
        disp.draw_pixel(x, disp.height() - 1, oled::Color::On);
    }
    for y in 0..disp.height() {
        disp.draw_pixel(0, y, oled::Color::On);
        disp.draw_pixel(disp.width() - 1, y, oled::Color::On);
    }
    disp.flush().unwrap();

    loop {
        asm::wfi();
    }
}
