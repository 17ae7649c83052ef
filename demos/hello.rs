use ssd1306_oled::dummybus::DummyI2c;
use ssd1306_oled::{DisplaySize, Gfx, PixelColor, Ssd1306, DEFAULT_ADDRESS};

fn main() {
    // no panel attached here, the dummy bus swallows every transaction;
    // on real hardware this would be the platform's blocking I2C handle
    let i2c = DummyI2c;

    let mut display = Ssd1306::new(i2c, DEFAULT_ADDRESS, DisplaySize::W128xH64)
        .expect("Infallible cannot fail");
    // if you are using a 128x32 module try DisplaySize::W128xH32

    let height = display.height();
    let width = display.width();

    let mut gfx = Gfx::new(&mut display);
    gfx.draw_string(0, 0, "Raspberry Pico", PixelColor::On);
    gfx.draw_string(0, 10, "Oled Example", PixelColor::On);
    gfx.draw_string(0, 20, "Have fun!", PixelColor::On);
    gfx.draw_progress_bar(0, height as i32 - 5, width, 5, 42, PixelColor::On);

    display.flush().expect("Infallible cannot fail");

    println!(
        "rendered a {}x{} frame into {} buffer bytes",
        width,
        height,
        display.buffer_size()
    );
}
