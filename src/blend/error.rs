use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BlendError>;

/// Errors produced while reading `.blend` data and exporting declarations.
#[derive(Debug, Error)]
pub enum BlendError {
	/// Filesystem, stream, or output sink failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON report serialization failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Input starts with neither `BLENDER` nor a zstd frame.
	#[error("not a .blend file (leading bytes {magic:02x?})")]
	UnknownMagic {
		/// Leading bytes, zero-padded.
		magic: [u8; 4],
	},
	/// zstd frame inflated to something other than a `.blend`.
	#[error("zstd payload is not a .blend file")]
	NotBlendAfterDecompress,
	/// zstd frame inflated past the size cap.
	#[error("zstd payload larger than {limit} bytes")]
	DecompressedTooLarge {
		/// Cap in bytes.
		limit: usize,
	},
	/// Header marks the file as big-endian.
	#[error("big-endian .blend files are not supported")]
	BigEndianUnsupported,
	/// Blender 5 header with a container version other than `01`.
	#[error("file format version {version} is not supported")]
	UnsupportedFormatVersion {
		/// Version digits from the header.
		version: u16,
	},
	/// Header bytes do not match either known layout.
	#[error("malformed .blend header")]
	InvalidHeader,
	/// Read ran past the end of the buffer.
	#[error("truncated data at {at}: wanted {need} bytes, {rem} left")]
	UnexpectedEof {
		/// Read position.
		at: usize,
		/// Bytes wanted.
		need: usize,
		/// Bytes left.
		rem: usize,
	},
	/// Block header declares a negative payload length.
	#[error("block declares length {len}")]
	NegativeBlockLength {
		/// Raw length.
		len: i64,
	},
	/// Block header declares a negative element count.
	#[error("block declares element count {nr}")]
	NegativeBlockCount {
		/// Raw count.
		nr: i64,
	},
	/// Block payload runs past the end of the file.
	#[error("block at {at} claims {len} bytes but only {rem} remain")]
	BlockLenOutOfRange {
		/// Offset of the block header.
		at: usize,
		/// Payload length from the header.
		len: u64,
		/// Bytes left after the header.
		rem: usize,
	},
	/// File has no `DNA1` block.
	#[error("no DNA1 block in file")]
	DnaNotFound,
	/// `DNA1` section out of order or misspelled.
	#[error("SDNA section at {at}: wanted {expected:?}, found {got:?}")]
	DnaBadTag {
		/// Tag required here.
		expected: [u8; 4],
		/// Tag present.
		got: [u8; 4],
		/// Payload offset of the tag.
		at: usize,
	},
	/// SDNA table entry refers past the end of another table.
	#[error("SDNA {kind} index {idx} out of range (max {max})")]
	DnaIndexOutOfRange {
		/// Table being indexed.
		kind: &'static str,
		/// Index found.
		idx: u32,
		/// Largest valid index.
		max: u32,
	},
	/// Two `STRC` entries describe the same type.
	#[error("SDNA type {type_idx} defined by structs {first} and {second}")]
	DnaDuplicateStructType {
		/// Type index.
		type_idx: u16,
		/// Earlier struct.
		first: u32,
		/// Later struct.
		second: u32,
	},
	/// Block references an SDNA struct index that does not exist.
	#[error("missing SDNA struct index {sdna_nr}")]
	MissingSdna {
		/// Missing SDNA struct index.
		sdna_nr: u32,
	},
	/// Field path does not exist on the struct being read.
	#[error("field {path} not found on {struct_name}")]
	FieldNotFound {
		/// Struct type name.
		struct_name: String,
		/// Requested dotted field path.
		path: String,
	},
	/// Field exists but has a different storage kind than requested.
	#[error("field {path} on {struct_name} is not {expected}")]
	FieldKindMismatch {
		/// Struct type name.
		struct_name: String,
		/// Requested dotted field path.
		path: String,
		/// Storage kind the caller asked for.
		expected: &'static str,
	},
	/// Struct element bytes were shorter than the SDNA layout.
	#[error("struct {struct_name} needs {need} bytes, have {have}")]
	StructTooSmall {
		/// Struct type name.
		struct_name: String,
		/// Required bytes.
		need: usize,
		/// Available bytes.
		have: usize,
	},
	/// A linked list revisited an element.
	#[error("linked list cycle at 0x{ptr:016x}")]
	ListCycle {
		/// Pointer visited twice.
		ptr: u64,
	},
	/// A linked list exceeded the traversal budget.
	#[error("linked list exceeded {max} elements")]
	ListTooLong {
		/// Maximum permitted elements.
		max: usize,
	},
	/// Source path has no usable file stem for naming outputs.
	#[error("cannot derive export base name from {path}")]
	MissingBaseName {
		/// Offending source path.
		path: String,
	},
	/// The companion asset exporter reported failure.
	#[error("asset export via {program} failed ({status}): {stderr}")]
	AssetExport {
		/// Program that was run.
		program: String,
		/// Exit status description.
		status: String,
		/// Trailing stderr output.
		stderr: String,
	},
	/// Requested export action was not registered in the menu.
	#[error("export action not registered: {id}")]
	ActionNotRegistered {
		/// Requested action id.
		id: String,
	},
}
