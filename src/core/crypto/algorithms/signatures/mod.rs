/*!
Signature algorithm implementations.
*/

mod dilithium;

pub use dilithium::Dilithium2Signature;
