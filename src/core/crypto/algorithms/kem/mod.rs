/*!
Key encapsulation algorithm implementations.
*/

mod kyber;

pub use kyber::Kyber512Kem;
