#![allow(missing_docs)]

mod end_to_end;
mod lifecycle;
mod nic_layout;
