mod common;

mod tests {
    use myrtio_ws2801::PixelStrip;
    use myrtio_ws2801::filter::{BrightnessFilter, Filter};
    use myrtio_ws2801::Rgb;

    use crate::common::RecordingBus;

    #[test]
    fn test_brightness_filter_rounds_half_to_even() {
        let mut filter = BrightnessFilter::new(0.5);
        let mut frame = [Rgb::new(25, 51, 255)];
        filter.apply(&mut frame);
        assert_eq!(frame, [Rgb::new(12, 26, 128)]);
    }

    #[test]
    fn test_full_brightness_is_untouched() {
        let mut filter = BrightnessFilter::new(1.0);
        let mut frame = [Rgb::new(25, 51, 255)];
        filter.apply(&mut frame);
        assert_eq!(frame, [Rgb::new(25, 51, 255)]);
        assert!(!BrightnessFilter::new(1.5).is_dimming());
        assert!(BrightnessFilter::new(0.99).is_dimming());
    }

    #[test]
    fn test_brightness_scaling_is_cumulative() {
        let bus = RecordingBus::new();
        let mut strip = PixelStrip::<_, 4>::new(1, bus.clone()).unwrap();
        strip.set_pixel_rgb(0, 200, 100, 50);

        strip.set_brightness(0.5).unwrap();
        assert_eq!(strip.brightness(), 0.5);
        assert_eq!(bus.last_write(), Some(vec![100, 50, 25]));

        strip.flush().unwrap();
        assert_eq!(bus.last_write(), Some(vec![50, 25, 12]));
        assert_eq!(strip.get_pixel_rgb(0), (50, 25, 12));
    }

    #[test]
    fn test_decimal_brightness_rounds_exact_ties_to_even() {
        let bus = RecordingBus::new();
        let mut strip = PixelStrip::<_, 4>::new(2, bus.clone()).unwrap();
        strip.set_pixel_rgb(0, 95, 175, 195);
        strip.set_brightness(0.3).unwrap();
        assert_eq!(bus.last_write().unwrap()[..3], [28, 52, 58]);

        let bus = RecordingBus::new();
        let mut strip = PixelStrip::<_, 4>::new(1, bus.clone()).unwrap();
        strip.set_pixel_rgb(0, 190, 10, 30);
        strip.set_brightness(0.15).unwrap();
        assert_eq!(bus.last_write(), Some(vec![28, 2, 4]));
    }

    #[test]
    fn test_brightness_skips_pixels_below_offset() {
        let bus = RecordingBus::new();
        let mut strip = PixelStrip::<_, 4>::new(2, bus.clone()).unwrap();
        strip.set_pixel_rgb(0, 200, 200, 200);
        strip.set_pixel_rgb(1, 200, 200, 200);
        strip.set_offset(1);

        strip.set_brightness(0.25).unwrap();
        assert_eq!(bus.last_write(), Some(vec![200, 200, 200, 50, 50, 50]));
    }

    #[test]
    fn test_zero_brightness_blanks_strip() {
        let bus = RecordingBus::new();
        let mut strip = PixelStrip::<_, 4>::new(2, bus.clone()).unwrap();
        strip.set_pixel(0, 0x00FF_FFFF);
        strip.set_brightness(0.0).unwrap();
        assert_eq!(bus.last_write(), Some(vec![0; 6]));
    }
}
