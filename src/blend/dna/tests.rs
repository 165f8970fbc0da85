use crate::blend::testutil::encode_dna;
use crate::blend::{BlendError, Dna};

const PRIMITIVES: &[(&str, u16)] = &[("char", 1), ("short", 2), ("int", 4), ("void", 0)];

#[test]
fn field_offsets_follow_declaration_order() {
	let payload = encode_dna(
		PRIMITIVES,
		&[
			("ListBase", &[("void", "*first"), ("void", "*last")]),
			("Bone", &[("Bone", "*next"), ("Bone", "*parent"), ("ListBase", "childbase"), ("char", "name[64]"), ("short", "flag")]),
		],
		8,
	);
	let dna = Dna::parse(&payload, 8).expect("dna parses");

	let bone_sdna = dna.sdna_for_type(5).expect("Bone is a struct");
	assert_eq!(dna.struct_name(bone_sdna), Some("Bone"));
	assert_eq!(dna.struct_size(bone_sdna), Some(8 + 8 + 16 + 64 + 2));

	let bone = dna.struct_by_sdna(bone_sdna).expect("bone struct");
	let offsets: Vec<_> = bone.fields.iter().map(|field| (field.ident.as_ref(), field.offset, field.size)).collect();
	assert_eq!(
		offsets,
		vec![("next", 0, 8), ("parent", 8, 8), ("childbase", 16, 16), ("name", 32, 64), ("flag", 96, 2)]
	);
	assert!(bone.field("next").is_some_and(|field| field.is_pointer));
	assert!(bone.field("missing").is_none());
}

#[test]
fn pointer_size_controls_pointer_fields() {
	let payload = encode_dna(PRIMITIVES, &[("Link", &[("Link", "*next"), ("int", "value")])], 4);
	let dna = Dna::parse(&payload, 4).expect("dna parses");
	let link = dna.struct_by_sdna(0).expect("link struct");
	assert_eq!(link.field("value").map(|field| field.offset), Some(4));
	assert_eq!(dna.struct_size(0), Some(8));
}

#[test]
fn bad_section_tag_is_reported() {
	let mut payload = encode_dna(PRIMITIVES, &[], 8);
	payload[4..8].copy_from_slice(b"NAMX");
	let err = Dna::parse(&payload, 8).expect_err("bad tag rejected");
	assert!(matches!(err, BlendError::DnaBadTag { expected, at: 4, .. } if expected == *b"NAME"));
}

#[test]
fn duplicate_struct_type_is_rejected() {
	let payload = encode_dna(PRIMITIVES, &[("A", &[("int", "x")]), ("A", &[("int", "y")])], 8);
	assert!(matches!(Dna::parse(&payload, 8), Err(BlendError::DnaDuplicateStructType { .. })));
}
