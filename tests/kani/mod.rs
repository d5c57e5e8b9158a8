//! Kani proof harnesses
//!
//! - `engine_proofs.rs`: insert/extract bookkeeping and heap property
//! - `inplace_proofs.rs`: heapify and heapsort over small symbolic arrays

#[cfg(kani)]
#[path = "engine_proofs.rs"]
mod engine_proofs;
#[cfg(kani)]
#[path = "inplace_proofs.rs"]
mod inplace_proofs;
