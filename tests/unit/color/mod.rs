pub mod whiteness;
