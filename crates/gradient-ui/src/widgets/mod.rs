pub mod gradient_picker;
