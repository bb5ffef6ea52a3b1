//! Media-type codecs for resultbundle
//!
//! Every [`MediaType`](resultbundle_core::MediaType) is bound to a [`Codec`]
//! that turns its payload into the bytes stored in an archive and back.
//!
//! ## Examples
//!
//! ```
//! use resultbundle_codec::{codec_for, TransportMode};
//! use resultbundle_core::{MediaType, Payload};
//!
//! let codec = codec_for(MediaType::Png);
//! let bytes = codec.encode(&Payload::Bytes(b"Hello".to_vec())).unwrap();
//!
//! let native = codec.decode(&bytes, TransportMode::Native).unwrap();
//! assert_eq!(native, Payload::Bytes(b"Hello".to_vec()));
//!
//! let transport = codec.decode(&bytes, TransportMode::Json).unwrap();
//! assert_eq!(transport, Payload::Text("SGVsbG8=".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod registry;

pub use codec::{decode_base64, Codec, CodecFamily, TransportMode};
pub use error::{CodecError, CodecResult};
pub use registry::{codec_for, get_codec};
