mod ffi;
mod helpers;
mod state;
