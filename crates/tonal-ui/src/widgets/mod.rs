pub mod gradient_slider;
