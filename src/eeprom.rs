//! Packs profiles into the image the controller firmware reads out of EEPROM.
//!
//! Image: a big-endian `u16` length, then one record per profile. A record is a header (a
//! platform bitmap byte followed by the platform positions packed two nibbles per byte), a
//! body length byte, and the body: the joystick threshold byte, the base layer, then the
//! optional mod layer. Each layer packs its twenty actions MSB first, five bits per action
//! id, with analog actions carrying an extra ten bit value. Layers are padded to a byte.

use anyhow::{anyhow, bail, Context};
use itertools::Itertools;
use protobuf::{EnumOrUnknown, MessageField};

use crate::protogen::profile::{
    profile::{
        layer::{action, analog_action, Action, AnalogAction, DigitalAction},
        Layer, Layout, Platform, PlatformConfig,
    },
    Profile,
};

pub const MAX_EEPROM_BYTES: usize = 1064;

const LAYER_ACTIONS: usize = 20;
const ACTION_ID_BITS: u32 = 5;
const ANALOG_VALUE_BITS: u32 = 10;
const MAX_ANALOG_VALUE: i32 = (1 << ANALOG_VALUE_BITS) - 1;
const MAX_DIGITAL_ACTION: i32 = DigitalAction::MOD as i32;
const MAX_PLATFORM: i32 = 8;
const MAX_POSITION: i32 = 0xF;
const MAX_JOYSTICK_THRESHOLD: i32 = 100;

pub fn encode(profiles: &[Profile]) -> anyhow::Result<Vec<u8>> {
    let mut records = vec![];
    for profile in profiles {
        records.extend(
            encode_profile(profile)
                .with_context(|| format!("Encoding profile: {}", profile.name))?,
        );
    }

    if records.len() + 2 > MAX_EEPROM_BYTES {
        bail!(
            "Encoded length of {} bytes exceeds the maximum of {} bytes",
            records.len() + 2,
            MAX_EEPROM_BYTES
        );
    }

    let mut image = Vec::with_capacity(records.len() + 2);
    image.extend((records.len() as u16).to_be_bytes());
    image.extend(records);

    debug!("Encoded {} profiles into {} bytes", profiles.len(), image.len());
    Ok(image)
}

pub fn decode_layout(image: &[u8], platform: Platform, position: u8) -> anyhow::Result<Layout> {
    if image.len() < 2 {
        bail!("Image is missing its length");
    }
    let len = u16::from_be_bytes([image[0], image[1]]) as usize;
    let records = image
        .get(2..2 + len)
        .ok_or_else(|| anyhow!("Image declares {} bytes but holds {}", len, image.len() - 2))?;

    let mut offset = 0;
    while offset < records.len() {
        let (configs, header_len) = decode_header(&records[offset..])?;
        offset += header_len;

        let body_len = *records
            .get(offset)
            .ok_or_else(|| anyhow!("Record at byte {} is missing its body", offset))?
            as usize;
        let body = records
            .get(offset + 1..offset + 1 + body_len)
            .ok_or_else(|| anyhow!("Record body at byte {} is truncated", offset))?;
        offset += 1 + body_len;

        if configs.contains(&(platform as i32, position)) {
            return decode_body(body);
        }
    }

    bail!("No profile for {:?} at position {}", platform, position)
}

fn encode_profile(profile: &Profile) -> anyhow::Result<Vec<u8>> {
    let layout = profile
        .layout
        .as_ref()
        .ok_or_else(|| anyhow!("Profile has no layout"))?;

    let mut record = encode_header(&profile.platform_config)?;
    let body = encode_body(layout)?;
    record.push(body.len() as u8);
    record.extend(body);
    Ok(record)
}

fn encode_header(configs: &[PlatformConfig]) -> anyhow::Result<Vec<u8>> {
    let mut masks = configs
        .iter()
        .map(|config| {
            let platform = config
                .platform
                .enum_value()
                .map_err(|platform| anyhow!("Unknown platform {}", platform))?;
            if platform == Platform::UNKNOWN {
                bail!("Required platform is not specified");
            }
            if platform as i32 > MAX_PLATFORM {
                bail!("Platform {:?} does not fit in the platform bitmap", platform);
            }
            if !(0..=MAX_POSITION).contains(&config.position) {
                bail!("Position {} does not fit in 4 bits", config.position);
            }

            Ok((platform, config.position as u8))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    masks.sort();

    if !masks.iter().map(|(platform, _)| platform).all_unique() {
        bail!("A platform is configured more than once");
    }

    let mut header = vec![0u8];
    for (platform, _) in masks.iter() {
        header[0] |= 1 << (8 - *platform as i32);
    }
    for pair in masks.chunks(2) {
        let low = pair.get(1).map_or(0, |(_, position)| *position);
        header.push((pair[0].1 << 4) | low);
    }

    Ok(header)
}

fn encode_body(layout: &Layout) -> anyhow::Result<Vec<u8>> {
    if !(0..=MAX_JOYSTICK_THRESHOLD).contains(&layout.joystick_threshold) {
        bail!(
            "Joystick threshold {} outside of [0-100] range",
            layout.joystick_threshold
        );
    }

    let base = layout
        .base
        .as_ref()
        .ok_or_else(|| anyhow!("Layout has no base layer"))?;

    let mut body = vec![layout.joystick_threshold as u8];
    body.extend(encode_layer(base).context("Encoding base layer")?);
    if let Some(mod_layer) = layout.mod_layer.as_ref() {
        body.extend(encode_layer(mod_layer).context("Encoding mod layer")?);
    }

    Ok(body)
}

fn encode_layer(layer: &Layer) -> anyhow::Result<Vec<u8>> {
    let mut writer = BitWriter::default();
    for (slot, action) in actions(layer).into_iter().enumerate() {
        match action.as_ref() {
            Some(action) => {
                encode_action(&mut writer, action).with_context(|| format!("Action {}", slot))?
            }
            None => writer.push(DigitalAction::NO_OP as u32, ACTION_ID_BITS),
        }
    }

    Ok(writer.finish())
}

fn encode_action(writer: &mut BitWriter, action: &Action) -> anyhow::Result<()> {
    match action
        .action
        .as_ref()
        .ok_or_else(|| anyhow!("Action is neither digital nor analog"))?
    {
        action::Action::Digital(digital) => {
            let digital = digital
                .enum_value()
                .map_err(|digital| anyhow!("Unknown digital action {}", digital))?;
            writer.push(digital as u32, ACTION_ID_BITS);
        }
        action::Action::Analog(analog) => {
            let id = analog
                .id
                .enum_value()
                .map_err(|id| anyhow!("Unknown analog action {}", id))?;
            if id == analog_action::ID::NONE {
                writer.push(DigitalAction::NO_OP as u32, ACTION_ID_BITS);
                return Ok(());
            }

            if !(0..=MAX_ANALOG_VALUE).contains(&analog.value) {
                bail!(
                    "Analog value {} outside of [0-{}] range",
                    analog.value,
                    MAX_ANALOG_VALUE
                );
            }

            let id = (id as i32 + MAX_DIGITAL_ACTION) as u32;
            writer.push(
                (id << ANALOG_VALUE_BITS) | analog.value as u32,
                ACTION_ID_BITS + ANALOG_VALUE_BITS,
            );
        }
    }

    Ok(())
}

fn decode_header(bytes: &[u8]) -> anyhow::Result<(Vec<(i32, u8)>, usize)> {
    let bitmap = *bytes
        .first()
        .ok_or_else(|| anyhow!("Record is missing its header"))?;

    let platforms = (1..=MAX_PLATFORM)
        .filter(|platform| bitmap & (1 << (8 - platform)) != 0)
        .collect_vec();
    let header_len = 1 + platforms.len().div_ceil(2);
    let positions = bytes
        .get(1..header_len)
        .ok_or_else(|| anyhow!("Record header is truncated"))?;

    let configs = platforms
        .into_iter()
        .enumerate()
        .map(|(idx, platform)| {
            let packed = positions[idx / 2];
            if idx % 2 == 0 {
                (platform, packed >> 4)
            } else {
                (platform, packed & 0xF)
            }
        })
        .collect_vec();

    Ok((configs, header_len))
}

fn decode_body(body: &[u8]) -> anyhow::Result<Layout> {
    let (threshold, layers) = body
        .split_first()
        .ok_or_else(|| anyhow!("Record body is empty"))?;

    let mut reader = BitReader::new(layers);
    let mut layout = Layout::new();
    layout.joystick_threshold = *threshold as i32;
    layout.base = MessageField::some(decode_layer(&mut reader).context("Decoding base layer")?);

    reader.align();
    if !reader.is_empty() {
        layout.mod_layer =
            MessageField::some(decode_layer(&mut reader).context("Decoding mod layer")?);
    }

    Ok(layout)
}

fn decode_layer(reader: &mut BitReader) -> anyhow::Result<Layer> {
    let mut layer = Layer::new();
    for slot in actions_mut(&mut layer) {
        let id = reader.read(ACTION_ID_BITS)? as i32;

        let mut action = Action::new();
        if id > MAX_DIGITAL_ACTION {
            let value = reader.read(ANALOG_VALUE_BITS)? as i32;
            action.action = Some(action::Action::Analog(AnalogAction {
                id: EnumOrUnknown::from_i32(id - MAX_DIGITAL_ACTION),
                value,
                ..Default::default()
            }));
        } else {
            action.action = Some(action::Action::Digital(EnumOrUnknown::from_i32(id)));
        }

        *slot = MessageField::some(action);
    }

    Ok(layer)
}

fn actions(layer: &Layer) -> [&MessageField<Action>; LAYER_ACTIONS] {
    [
        &layer.thumb_top,
        &layer.thumb_middle,
        &layer.thumb_bottom,
        &layer.index_top,
        &layer.index_middle,
        &layer.middle_top,
        &layer.middle_middle,
        &layer.middle_bottom,
        &layer.ring_top,
        &layer.ring_middle,
        &layer.ring_bottom,
        &layer.pinky_top,
        &layer.pinky_middle,
        &layer.pinky_bottom,
        &layer.left_index_extra,
        &layer.left_middle_extra,
        &layer.left_ring_extra,
        &layer.right_index_extra,
        &layer.right_middle_extra,
        &layer.right_ring_extra,
    ]
}

fn actions_mut(layer: &mut Layer) -> [&mut MessageField<Action>; LAYER_ACTIONS] {
    [
        &mut layer.thumb_top,
        &mut layer.thumb_middle,
        &mut layer.thumb_bottom,
        &mut layer.index_top,
        &mut layer.index_middle,
        &mut layer.middle_top,
        &mut layer.middle_middle,
        &mut layer.middle_bottom,
        &mut layer.ring_top,
        &mut layer.ring_middle,
        &mut layer.ring_bottom,
        &mut layer.pinky_top,
        &mut layer.pinky_middle,
        &mut layer.pinky_bottom,
        &mut layer.left_index_extra,
        &mut layer.left_middle_extra,
        &mut layer.left_ring_extra,
        &mut layer.right_index_extra,
        &mut layer.right_middle_extra,
        &mut layer.right_ring_extra,
    ]
}

#[derive(Debug, Default)]
struct BitWriter {
    bytes: Vec<u8>,
    current: u8,
    used: u32,
}

impl BitWriter {
    fn push(&mut self, data: u32, bits: u32) {
        for bit in (0..bits).rev() {
            self.current = (self.current << 1) | ((data >> bit) & 1) as u8;
            self.used += 1;
            if self.used == 8 {
                self.bytes.push(self.current);
                self.current = 0;
                self.used = 0;
            }
        }
    }

    fn finish(mut self) -> Vec<u8> {
        if self.used > 0 {
            self.bytes.push(self.current << (8 - self.used));
        }
        self.bytes
    }
}

#[derive(Debug)]
struct BitReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> BitReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    fn read(&mut self, bits: u32) -> anyhow::Result<u32> {
        let mut data = 0;
        for _ in 0..bits {
            let byte = *self
                .bytes
                .get(self.position / 8)
                .ok_or_else(|| anyhow!("Layer is truncated at bit {}", self.position))?;
            data = (data << 1) | ((byte >> (7 - self.position % 8)) & 1) as u32;
            self.position += 1;
        }

        Ok(data)
    }

    fn align(&mut self) {
        self.position = self.position.div_ceil(8) * 8;
    }

    fn is_empty(&self) -> bool {
        self.position >= self.bytes.len() * 8
    }
}
