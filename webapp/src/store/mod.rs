// shared ui state
//
// each store is a Copy handle around a signal, installed once by its provider
// near the root and read through its use_* hook.  the hooks panic when called
// outside their provider: that is a wiring mistake, not a runtime condition
pub mod language;
pub mod theme;
