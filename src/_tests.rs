use std::path::Path;

use itertools::Itertools;
use protobuf::{EnumOrUnknown, MessageField};
use walkdir::WalkDir;

use crate::protogen::profile::{
    profile::{
        layer::{action, analog_action, Action, AnalogAction, DigitalAction},
        Layer, Layout, Platform, PlatformConfig,
    },
    Profile,
};

mod compile;
mod eeprom;
mod log;
mod profiles;

const SWITCH_PROFILE: &str = r#"
name: "switch"
platform_config {
  platform: SWITCH
  position: 1
}
layout {
  joystick_threshold: 40
  base {
    thumb_top { digital: X }
    thumb_middle { digital: CIRCLE }
    index_top { analog { id: R_STICK_X value: 512 } }
  }
}
"#;

const PC_PROFILE: &str = r#"
name: "pc"
platform_config { platform: PC position: 0 }
layout {
  joystick_threshold: 25
  base { pinky_bottom { digital: MOD } }
  mod_layer { pinky_bottom { digital: HOME } }
}
"#;

const MALFORMED_PROFILE: &str = r#"
name: "broken"
layout {
  joystick_threshold: 40
"#;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .pretty()
        .with_ansi(false)
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn write(root: &Path, relative: &str, contents: impl AsRef<[u8]>) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn files_under(root: &Path) -> Vec<String> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect_vec()
}

fn digital(digital: DigitalAction) -> MessageField<Action> {
    MessageField::some(Action {
        action: Some(action::Action::Digital(EnumOrUnknown::new(digital))),
        ..Default::default()
    })
}

fn analog(id: analog_action::ID, value: i32) -> MessageField<Action> {
    MessageField::some(Action {
        action: Some(action::Action::Analog(AnalogAction {
            id: EnumOrUnknown::new(id),
            value,
            ..Default::default()
        })),
        ..Default::default()
    })
}

fn profile(
    name: &str,
    platforms: &[(Platform, i32)],
    joystick_threshold: i32,
    base: Layer,
    mod_layer: Option<Layer>,
) -> Profile {
    Profile {
        name: name.to_string(),
        platform_config: platforms
            .iter()
            .map(|(platform, position)| PlatformConfig {
                platform: EnumOrUnknown::new(*platform),
                position: *position,
                ..Default::default()
            })
            .collect_vec(),
        layout: MessageField::some(Layout {
            joystick_threshold,
            base: MessageField::some(base),
            mod_layer: MessageField::from_option(mod_layer),
            ..Default::default()
        }),
        ..Default::default()
    }
}
