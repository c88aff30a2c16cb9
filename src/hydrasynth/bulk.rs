//! Conversion between a parameter store and the 2790-byte patch image.

use log::{debug, trace};

use super::error::DecodeError;
use super::layout::{
    Field, FxBlock, Kind, Version, FX_TYPES, IMAGE_SIZE, LAYOUT, MYSTERY_BYTES, VERSION_OFFSET,
    WRITE_MODE,
};
use super::store::ParamStore;

/// Builds a 2.0.0-format image from `store`. Keys missing from the store
/// are written as zero, or as their minimum when zero is out of range.
pub fn encode_image<S: ParamStore + ?Sized>(store: &S) -> Vec<u8> {
    let mut image = vec![0u8; IMAGE_SIZE];
    image[0] = WRITE_MODE;
    image[VERSION_OFFSET] = Version::V2_0.tag();
    for (offset, byte) in MYSTERY_BYTES {
        image[offset] = byte;
    }
    for field in &LAYOUT.fields {
        write_field(&mut image, field, store);
    }
    for fx in &LAYOUT.fx {
        write_fx(&mut image, fx, store);
    }
    debug!(
        "encoded patch image for \"{}\"",
        store.text("name").unwrap_or_default()
    );
    image
}

/// Loads every field of `image` into `store`. Fields introduced after the
/// image's format version are left untouched.
pub fn decode_image<S: ParamStore + ?Sized>(
    image: &[u8],
    store: &mut S,
) -> Result<Version, DecodeError> {
    if image.len() != IMAGE_SIZE {
        return Err(DecodeError::WrongImageSize(image.len()));
    }
    let tag = image[VERSION_OFFSET];
    let version = Version::from_tag(tag).ok_or(DecodeError::UnknownVersion(tag))?;
    for field in LAYOUT.fields.iter().filter(|f| f.since <= version) {
        read_field(image, field, store);
    }
    // The effect type decides which keys the parameter block belongs to, so
    // the plain fields must be loaded first.
    for fx in &LAYOUT.fx {
        read_fx(image, fx, store);
    }
    debug!(
        "decoded {version:?} patch image \"{}\"",
        store.text("name").unwrap_or_default()
    );
    Ok(version)
}

/// Points an encoded image at a different bank and slot.
pub fn set_location(image: &mut [u8], bank: u8, number: u8) {
    image[2] = bank;
    image[3] = number;
}

fn default_value(field: &Field) -> i32 {
    0.clamp(field.min, field.max)
}

fn write_field<S: ParamStore + ?Sized>(image: &mut [u8], field: &Field, store: &S) {
    let o = field.offset;
    if let Kind::Text(len) = field.kind {
        let text = store.text(&field.key).unwrap_or_default();
        let mut bytes = text.bytes().take(len);
        for b in &mut image[o..o + len] {
            *b = bytes.next().unwrap_or(b' ');
        }
        return;
    }
    let value = store
        .value(&field.key)
        .unwrap_or_else(|| default_value(field))
        .clamp(field.min, field.max);
    trace!("{} = {value} at {o}", field.key);
    match field.kind {
        Kind::U8 => image[o] = value as u8,
        Kind::S8 => image[o] = value as i8 as u8,
        Kind::U16 => image[o..o + 2].copy_from_slice(&(value as u16).to_le_bytes()),
        Kind::S16 => image[o..o + 2].copy_from_slice(&(value as i16).to_le_bytes()),
        Kind::Flag(bit) => image[o] = bit.set(image[o], value != 0),
        Kind::Split { rem } => {
            image[o] = (value / 10) as u8;
            image[rem] = (value % 10) as u8;
        }
        Kind::Text(_) => {}
    }
}

fn read_field<S: ParamStore + ?Sized>(image: &[u8], field: &Field, store: &mut S) {
    let o = field.offset;
    let value = match field.kind {
        Kind::Text(len) => {
            let text: String = image[o..o + len]
                .iter()
                .map(|&b| if (0x20..0x7F).contains(&b) { b as char } else { ' ' })
                .collect();
            // Trailing padding is not part of the name.
            store.set_text(&field.key, text.trim_end());
            return;
        }
        Kind::U8 => i32::from(image[o]),
        Kind::S8 => i32::from(image[o] as i8),
        Kind::U16 => i32::from(u16::from_le_bytes([image[o], image[o + 1]])),
        Kind::S16 => i32::from(i16::from_le_bytes([image[o], image[o + 1]])),
        Kind::Flag(bit) => bit.get(image[o]),
        Kind::Split { rem } => i32::from(image[o]) * 10 + i32::from(image[rem]),
    };
    trace!("{} = {value} from {o}", field.key);
    store.set_value(&field.key, value);
}

fn current_fx_type<S: ParamStore + ?Sized>(fx: &FxBlock, store: &S) -> i32 {
    store
        .value(&fx.type_key())
        .unwrap_or(0)
        .clamp(0, FX_TYPES - 1)
}

fn write_fx<S: ParamStore + ?Sized>(image: &mut [u8], fx: &FxBlock, store: &S) {
    let fx_type = current_fx_type(fx, store);
    if fx_type == 0 {
        return;
    }
    for param in 1..=5 {
        let value = store.value(&fx.param_key(fx_type, param)).unwrap_or(0);
        let o = fx.param_offset(param);
        image[o..o + 2].copy_from_slice(&(value as u16).to_le_bytes());
    }
}

fn read_fx<S: ParamStore + ?Sized>(image: &[u8], fx: &FxBlock, store: &mut S) {
    let fx_type = current_fx_type(fx, store);
    if fx_type == 0 {
        return;
    }
    for param in 1..=5 {
        let o = fx.param_offset(param);
        let value = i32::from(u16::from_le_bytes([image[o], image[o + 1]]));
        store.set_value(&fx.param_key(fx_type, param), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydrasynth::store::Patch;

    fn sample() -> Patch {
        let mut p = Patch::init();
        p.set_text("name", "Glass Pad");
        p.set_text("macro3name", "Shimmer");
        p.set_value("category", 13);
        p.set_value("color", 7);
        p.set_value("osc1semi", -12);
        p.set_value("osc2cent", -37);
        p.set_value("osc1type", 200);
        p.set_value("voiceglidelegato", 1);
        p.set_value("voicewarmmode", 1);
        p.set_value("reverbpredelay", 873);
        p.set_value("modmatrix4modtarget", 5);
        p.set_value("lfo5step64", 1000);
        p.set_value("prefxtype", 4);
        p.set_value("prefx4param5", 300);
        p.set_value("postfxtype", 8);
        p.set_value("postfx8param1", 900);
        p.set_value("env2trigsrc4", 9);
        p.set_value("arpchance", 60);
        p
    }

    #[test]
    fn image_round_trips() {
        let original = sample();
        let image = encode_image(&original);
        assert_eq!(image.len(), IMAGE_SIZE);
        let mut decoded = Patch::init();
        assert_eq!(decode_image(&image, &mut decoded), Ok(Version::V2_0));
        for (key, value) in original.values() {
            assert_eq!(decoded.value(key), Some(value), "{key}");
        }
        for (key, text) in original.texts() {
            assert_eq!(decoded.text(key), Some(text), "{key}");
        }
    }

    #[test]
    fn names_with_trailing_spaces_round_trip() {
        let mut original = Patch::init();
        original.set_text("name", "Lead  ");
        original.set_text("macro8name", " Air");
        let mut decoded = Patch::new();
        decode_image(&encode_image(&original), &mut decoded).unwrap();
        assert_eq!(decoded.text("name"), Some("Lead"));
        assert_eq!(decoded.texts(), original.texts());
    }

    #[test]
    fn split_and_signed_fields_land_where_expected() {
        let image = encode_image(&sample());
        assert_eq!(image[466], 87);
        assert_eq!(image[2300], 3);
        assert_eq!(image[64 + 3], (-12i8) as u8);
        assert_eq!(&image[104 + 4..104 + 6], &(-37i16).to_le_bytes());
        assert_eq!(image[42], 0x02);
        assert_eq!(image[43], 0x02);
        assert_eq!(&image[9..25], b"Glass Pad       ");
    }

    #[test]
    fn only_the_selected_fx_block_is_written() {
        let mut p = sample();
        p.set_value("prefx1param1", 777);
        let image = encode_image(&p);
        assert_eq!(&image[446..448], &300u16.to_le_bytes());
        assert_ne!(&image[438..440], &777u16.to_le_bytes());

        p.set_value("prefxtype", 0);
        let image = encode_image(&p);
        assert!(image[438..448].iter().all(|&b| b == 0));
    }

    #[test]
    fn inactive_fx_keys_survive_decode() {
        let image = encode_image(&sample());
        let mut target = Patch::init();
        target.set_value("prefx1param1", 555);
        decode_image(&image, &mut target).unwrap();
        assert_eq!(target.value("prefx1param1"), Some(555));
        assert_eq!(target.value("prefx4param5"), Some(300));
    }

    #[test]
    fn out_of_range_fx_type_is_clamped() {
        let mut image = encode_image(&sample());
        image[432] = 42;
        let mut p = Patch::new();
        decode_image(&image, &mut p).unwrap();
        // The type field itself is clamped by the store, and the block is
        // read as the last effect type.
        assert_eq!(p.value("prefxtype"), Some(9));
        assert!(p.value("prefx9param1").is_some());
    }

    #[test]
    fn version_1_5_leaves_new_fields_alone() {
        let mut image = encode_image(&sample());
        image[VERSION_OFFSET] = Version::V1_5.tag();
        let mut p = Patch::init();
        p.set_value("arpchance", 11);
        assert_eq!(decode_image(&image, &mut p), Ok(Version::V1_5));
        assert_eq!(p.value("arpchance"), Some(11));
        assert_eq!(p.value("reverbpredelay"), Some(873));
    }

    #[test]
    fn bad_images_are_rejected() {
        let mut p = Patch::new();
        assert_eq!(
            decode_image(&[0u8; 100], &mut p),
            Err(DecodeError::WrongImageSize(100))
        );
        let mut image = encode_image(&sample());
        image[VERSION_OFFSET] = 0x42;
        assert_eq!(
            decode_image(&image, &mut p),
            Err(DecodeError::UnknownVersion(0x42))
        );
    }

    #[test]
    fn mystery_bytes_are_always_present() {
        let image = encode_image(&Patch::new());
        assert_eq!(image[0], WRITE_MODE);
        for (offset, byte) in MYSTERY_BYTES {
            assert_eq!(image[offset], byte);
        }
    }
}
