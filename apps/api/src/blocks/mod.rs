// Block validation API: converts client-supplied blocks into the content vocabulary.

pub mod handlers;
