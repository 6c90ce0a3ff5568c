pub mod roster_loader;
