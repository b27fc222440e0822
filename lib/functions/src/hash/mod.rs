mod md5;
mod sha1;
mod sha256;
mod sha384;
mod sha512;

pub use self::md5::Md5RdfOp;
pub use self::sha1::Sha1RdfOp;
pub use sha256::Sha256RdfOp;
pub use sha384::Sha384RdfOp;
pub use sha512::Sha512RdfOp;
