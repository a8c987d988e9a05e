mod params;

pub use encode::{Encodable, serialize};
pub use params::Params;

pub mod encode {
    pub use bitcoin::consensus::encode::{Encodable, serialize};
}
