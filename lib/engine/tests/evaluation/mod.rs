mod custom_functions;
mod exists;
mod functions;
mod operators;
