mod directives;
mod fixtures;
mod nesting;
mod properties;
