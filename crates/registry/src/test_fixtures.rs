#![allow(dead_code)]

use crate::{Candidate, Contract, FamilyId, TypeDescriptor};

pub trait Greeter: Send + Sync {
	fn greet(&self) -> String;
}

pub struct Greeters;

impl Contract for Greeters {
	type Object = dyn Greeter;
	const ROOT: &'static str = "Greeter";
	const OPERATIONS: &'static [&'static str] = &["greet"];
}

pub struct Hello;

impl Greeter for Hello {
	fn greet(&self) -> String {
		"hello".into()
	}
}

pub struct Howdy;

impl Greeter for Howdy {
	fn greet(&self) -> String {
		"howdy".into()
	}
}

pub fn hello() -> Box<dyn Greeter> {
	Box::new(Hello)
}

pub fn howdy() -> Box<dyn Greeter> {
	Box::new(Howdy)
}

pub fn candidate(name: &'static str, factory: fn() -> Box<dyn Greeter>) -> Candidate<Greeters> {
	Candidate::with_operations(name, module_path!(), &["greet"], factory)
}

pub fn descriptor(
	family: FamilyId,
	key: &str,
	factory: fn() -> Box<dyn Greeter>,
) -> TypeDescriptor<Greeters> {
	TypeDescriptor {
		key: key.to_owned(),
		name: key.to_owned().into(),
		origin: module_path!(),
		family,
		factory,
	}
}
