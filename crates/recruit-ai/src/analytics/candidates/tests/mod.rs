mod common;
mod diff;
mod routing;
mod scoring;
