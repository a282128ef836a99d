mod common;
mod rules;
mod scoring;
