use image::{DynamicImage, GenericImageView};
use ndarray::{Array, ArrayD, IxDyn};
use stackview_core::{moving_square, BrowseOptions, Colormap, Error, StackBrowser};

fn u8_stack(frames: usize, height: usize, width: usize) -> ArrayD<u8> {
    Array::from_shape_fn(IxDyn(&[frames, height, width]), |idx| {
        u8::try_from((idx[0] * 50 + idx[1] * 10 + idx[2]) % 256).unwrap()
    })
}

#[test]
fn test_moving_square_with_colormap() {
    let stack = moving_square(4, (16, 16), 2).into_dyn();
    let options = BrowseOptions::new().with_colormap(Colormap::Gray);
    let browser = StackBrowser::new(stack, options).unwrap();
    assert_eq!(browser.len(), 4);
    assert_eq!(browser.slider_range(), 0..=3);

    let frame = browser.on_index_change(1).unwrap();
    let DynamicImage::ImageRgba8(rgba) = frame else {
        panic!("expected an RGBA frame");
    };
    assert_eq!(rgba.dimensions(), (16, 16));
    // Square of frame 1 spans rows/cols 6..10.
    assert_eq!(rgba.get_pixel(7, 7).0, [255, 255, 255, 255]);
    assert_eq!(rgba.get_pixel(0, 0).0, [0, 0, 0, 255]);
}

#[test]
fn test_gray_passthrough_without_processing() {
    let stack = u8_stack(3, 4, 5);
    let options = BrowseOptions::new().with_enhance_contrast(false);
    let browser = StackBrowser::new(stack.clone(), options).unwrap();

    let frame = browser.on_index_change(2).unwrap();
    let DynamicImage::ImageLuma8(gray) = frame else {
        panic!("expected a grayscale frame");
    };
    for (x, y, px) in gray.enumerate_pixels() {
        assert_eq!(px.0[0], stack[[2, y as usize, x as usize]]);
    }
}

#[test]
fn test_wide_integers_need_preprocessing() {
    let stack = Array::from_shape_fn(IxDyn(&[2, 3, 4]), |idx| {
        u16::try_from(idx[0] + idx[1] * 1000 + idx[2]).unwrap()
    });

    let raw = BrowseOptions::new()
        .with_enhance_contrast(false)
        .with_colormap(Colormap::Viridis);
    let browser = StackBrowser::new(stack.clone(), raw).unwrap();
    assert_eq!(browser.len(), 2);
    assert_eq!(
        browser.on_index_change(0).unwrap_err(),
        Error::IndexOutOfRange {
            index: 1000,
            len: 256
        }
    );

    let stretched = BrowseOptions::new().with_colormap(Colormap::Viridis);
    let browser = StackBrowser::new(stack.clone(), stretched).unwrap();
    let frame = browser.on_index_change(0).unwrap();
    let DynamicImage::ImageRgba8(rgba) = frame else {
        panic!("expected a colorized frame");
    };
    assert_eq!(rgba.dimensions(), (4, 3));
    assert_eq!(rgba.get_pixel(0, 0).0, [68, 1, 84, 255]);
    assert_eq!(rgba.get_pixel(3, 2).0, [253, 231, 37, 255]);

    let clipped = BrowseOptions::new()
        .with_enhance_contrast(false)
        .with_cutoff(None, Some(255.0));
    let browser = StackBrowser::new(stack, clipped).unwrap();
    let frame = browser.on_index_change(1).unwrap();
    let DynamicImage::ImageLuma8(gray) = frame else {
        panic!("expected a grayscale frame");
    };
    assert_eq!(gray.get_pixel(2, 0).0, [3]);
    assert_eq!(gray.get_pixel(0, 1).0, [255]);
}

#[test]
fn test_small_table_limits_pixel_values() {
    let stack = u8_stack(1, 4, 4);
    let options = BrowseOptions::new()
        .with_colormap(Colormap::Hot)
        .with_table_size(10);
    let browser = StackBrowser::new(stack, options).unwrap();
    assert!(matches!(
        browser.on_index_change(0),
        Err(Error::IndexOutOfRange { len: 10, .. })
    ));
}

#[test]
fn test_rgb_stack_and_resize() {
    let stack = Array::from_shape_fn(IxDyn(&[2, 4, 5, 3]), |idx| {
        u8::try_from(idx[3] * 80).unwrap()
    });
    let options = BrowseOptions::new()
        .with_enhance_contrast(false)
        .with_resize(2.0);
    let browser = StackBrowser::new(stack, options).unwrap();

    let frame = browser.on_index_change(1).unwrap();
    assert!(matches!(frame, DynamicImage::ImageRgb8(_)));
    assert_eq!(frame.dimensions(), (10, 8));
    assert_eq!(frame.to_rgb8().get_pixel(3, 3).0, [0, 80, 160]);
}

#[test]
fn test_single_rgb_image_is_one_frame() {
    let image = ArrayD::<u8>::zeros(IxDyn(&[6, 7, 3]));
    let browser = StackBrowser::new(image, BrowseOptions::default()).unwrap();
    assert_eq!(browser.len(), 1);
    assert!(matches!(
        browser.on_index_change(0).unwrap(),
        DynamicImage::ImageRgb8(_)
    ));
}

#[test]
fn test_browse_along_second_axis() {
    let stack = u8_stack(3, 4, 5);
    let options = BrowseOptions::new().with_axis(1).with_enhance_contrast(false);
    let browser = StackBrowser::new(stack.clone(), options).unwrap();
    assert_eq!(browser.len(), 4);

    let frame = browser.frame_at(2).unwrap();
    assert_eq!(frame.dim(), (3, 5, 1));
    assert_eq!(frame[[1, 4, 0]], stack[[1, 2, 4]]);
}

#[test]
fn test_index_past_end() {
    let browser = StackBrowser::new(u8_stack(3, 2, 2), BrowseOptions::default()).unwrap();
    assert_eq!(
        browser.on_index_change(3).unwrap_err(),
        Error::IndexOutOfRange { index: 3, len: 3 }
    );
}

#[test]
fn test_frame_at_colorized_shape() {
    let stack = moving_square(2, (8, 6), 1).into_dyn();
    let options = BrowseOptions::new()
        .with_colormap(Colormap::Inferno)
        .with_resize(0.5);
    let browser = StackBrowser::new(stack, options).unwrap();
    let frame = browser.frame_at(0).unwrap();
    assert_eq!(frame.dim(), (4, 3, 4));
    assert!(frame.iter().skip(3).step_by(4).all(|&a| a == 255));
}

#[test]
fn test_rendering_is_repeatable() {
    let stack = moving_square(3, (10, 10), 1).into_dyn();
    let browser =
        StackBrowser::new(stack, BrowseOptions::new().with_colormap(Colormap::Plasma)).unwrap();
    assert_eq!(browser.frame_at(2).unwrap(), browser.frame_at(2).unwrap());
}

#[cfg(feature = "serde")]
#[test]
fn test_options_deserialize_with_defaults() {
    let options: BrowseOptions =
        serde_json::from_str(r#"{"axis": 1, "colormap": {"colormap": "viridis", "reversed": true}}"#)
            .unwrap();
    assert_eq!(options.axis, 1);
    assert!(options.enhance_contrast);
    assert_eq!(options.table_size, 256);
    assert_eq!(options.colormap.map(|c| c.name()), Some("viridis_r".to_string()));
}
