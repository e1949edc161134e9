use pretty_assertions::assert_eq;
use protobuf::MessageField;

use crate::{
    eeprom::{decode_layout, encode, MAX_EEPROM_BYTES},
    parse_text,
    protogen::profile::{
        profile::{
            layer::{analog_action, Action, DigitalAction},
            Layer, Layout, Platform,
        },
        Profile,
    },
};

use super::{analog, digital, profile, PC_PROFILE, SWITCH_PROFILE};

fn single_action(action: MessageField<Action>) -> Layer {
    let mut layer = Layer::new();
    layer.thumb_top = action;
    layer
}

fn encode_err(profile: Profile) -> String {
    format!("{:#}", encode(&[profile]).unwrap_err())
}

#[test]
fn encodes_digital_profile() -> anyhow::Result<()> {
    let image = encode(&[profile(
        "switch",
        &[(Platform::SWITCH, 1)],
        40,
        single_action(digital(DigitalAction::X)),
        None,
    )])?;

    #[rustfmt::skip]
    let expected: [u8; 19] = [
        0x00, 0x11,
        // Header: switch bit, position 1 in the high nibble.
        0x80, 0x10,
        // Body length, threshold, then 20 five bit actions.
        14, 40,
        0x08, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    assert_eq!(image, expected);

    Ok(())
}

#[test]
fn packs_analog_actions_across_bytes() -> anyhow::Result<()> {
    let mut base = Layer::new();
    base.thumb_top = digital(DigitalAction::MOD);
    base.thumb_middle = analog(analog_action::ID::SLIDER_RIGHT, 1023);

    let image = encode(&[profile("analog", &[(Platform::PC, 0)], 0, base, None)])?;

    // MOD is 11001, then id 29 (11101) and value 1111111111.
    assert_eq!(&image[2..4], [0x40, 0x00]);
    assert_eq!(image[4], 15);
    assert_eq!(image[5], 0);
    assert_eq!(&image[6..9], [0xCF, 0x7F, 0xF0]);
    assert!(image[9..].iter().all(|byte| *byte == 0));
    assert_eq!(image.len(), 2 + 2 + 1 + 1 + 14);

    Ok(())
}

#[test]
fn analog_none_encodes_as_no_op() -> anyhow::Result<()> {
    let image = encode(&[profile(
        "none",
        &[(Platform::SWITCH, 0)],
        50,
        single_action(analog(analog_action::ID::NONE, 300)),
        None,
    )])?;

    assert_eq!(image[4], 14);
    assert!(image[6..].iter().all(|byte| *byte == 0));

    Ok(())
}

#[test]
fn header_sorts_platforms_and_packs_positions() -> anyhow::Result<()> {
    let image = encode(&[profile(
        "both",
        &[(Platform::PC, 3), (Platform::SWITCH, 2)],
        40,
        Layer::new(),
        None,
    )])?;

    assert_eq!(&image[2..4], [0xC0, 0x23]);

    Ok(())
}

#[test]
fn decodes_layout_for_platform_and_position() -> anyhow::Result<()> {
    let switch = parse_text(SWITCH_PROFILE.as_bytes())?;
    let mut pc = parse_text(PC_PROFILE.as_bytes())?;
    pc.platform_config.push({
        let mut config = pc.platform_config[0].clone();
        config.platform = Platform::SWITCH.into();
        config.position = 2;
        config
    });

    let image = encode(&[switch, pc])?;

    let layout = decode_layout(&image, Platform::SWITCH, 1)?;
    assert_eq!(layout.joystick_threshold, 40);
    assert_eq!(layout.base.thumb_top, digital(DigitalAction::X));
    assert_eq!(layout.base.thumb_middle, digital(DigitalAction::CIRCLE));
    assert_eq!(
        layout.base.index_top,
        analog(analog_action::ID::R_STICK_X, 512)
    );
    assert_eq!(layout.base.pinky_bottom, digital(DigitalAction::NO_OP));
    assert!(layout.mod_layer.is_none());

    let layout = decode_layout(&image, Platform::PC, 0)?;
    assert_eq!(layout.joystick_threshold, 25);
    assert_eq!(layout.base.pinky_bottom, digital(DigitalAction::MOD));
    assert_eq!(layout.mod_layer.pinky_bottom, digital(DigitalAction::HOME));

    let shared: Layout = decode_layout(&image, Platform::SWITCH, 2)?;
    assert_eq!(shared, layout);

    assert!(decode_layout(&image, Platform::PC, 1).is_err());

    Ok(())
}

#[test]
fn truncated_image_is_rejected() -> anyhow::Result<()> {
    let image = encode(&[parse_text(SWITCH_PROFILE.as_bytes())?])?;

    assert!(decode_layout(&image[..1], Platform::SWITCH, 1).is_err());
    assert!(decode_layout(&image[..6], Platform::SWITCH, 1).is_err());

    Ok(())
}

#[test]
fn rejects_invalid_profiles() {
    let valid = || {
        profile(
            "invalid",
            &[(Platform::SWITCH, 1)],
            40,
            Layer::new(),
            None,
        )
    };

    let mut unknown_platform = valid();
    unknown_platform.platform_config[0].platform = Platform::UNKNOWN.into();
    assert!(encode_err(unknown_platform).contains("platform is not specified"));

    let mut position = valid();
    position.platform_config[0].position = 16;
    assert!(encode_err(position).contains("Position 16"));

    let mut duplicate = valid();
    duplicate
        .platform_config
        .push(duplicate.platform_config[0].clone());
    assert!(encode_err(duplicate).contains("more than once"));

    let mut threshold = valid();
    threshold.layout.mut_or_insert_default().joystick_threshold = 101;
    assert!(encode_err(threshold).contains("Joystick threshold 101"));

    let mut no_layout = valid();
    no_layout.layout.clear();
    assert!(encode_err(no_layout).contains("no layout"));

    let mut no_base = valid();
    no_base.layout.mut_or_insert_default().base.clear();
    assert!(encode_err(no_base).contains("no base layer"));

    let mut empty_action = valid();
    empty_action.layout.mut_or_insert_default().base = MessageField::some(single_action(
        MessageField::some(Action::new()),
    ));
    assert!(encode_err(empty_action).contains("neither digital nor analog"));

    let mut analog_value = valid();
    analog_value.layout.mut_or_insert_default().mod_layer = MessageField::some(single_action(
        analog(analog_action::ID::R_STICK_Y, 1024),
    ));
    let message = encode_err(analog_value);
    assert!(message.contains("mod layer"));
    assert!(message.contains("Analog value 1024"));
}

#[test]
fn rejects_images_past_eeprom_capacity() -> anyhow::Result<()> {
    // Each record is 30 bytes: two header bytes, a length byte, and a 27 byte body.
    let profiles = (0..36)
        .map(|idx| {
            profile(
                &format!("profile_{}", idx),
                &[(Platform::SWITCH, idx % 16)],
                10,
                Layer::new(),
                Some(Layer::new()),
            )
        })
        .collect::<Vec<_>>();

    let image = encode(&profiles[..35])?;
    assert_eq!(image.len(), 2 + 35 * 30);
    assert!(image.len() <= MAX_EEPROM_BYTES);

    let error = encode(&profiles).unwrap_err();
    assert!(error.to_string().contains("exceeds the maximum"));

    Ok(())
}
