mod identity;
pub use identity::demo_identity_fn;
