//! Vector and matrix type definitions.
//!
//! One partial specialization of `vec` per entity. Matrices are vectors of
//! column vectors, and `vec<W, vec<H, T>>` is more specialized than
//! `vec<D, T>`, so every matrix shape picks up its own definition.

mod common;
mod factories;
mod matrix;
mod vector;

use mathgen_emit::{make, Emitter, Token};
use mathgen_tables::Entity;

use crate::{out, GenContext};

pub fn emit<E: Emitter>(cx: &mut GenContext<E>) {
    for name in [
        "vec",
        "uninit_t",
        "vec_base_t",
        "floating_point_t",
        "larger_t",
    ] {
        cx.require(name);
    }

    cx.banner("Vectors and matrices");
    cx.open_section("Vector");

    for entity in Entity::all() {
        tracing::trace!(entity = %entity.alias(), "emitting entity");
        let spelled = spelling(cx, entity, "T");
        out!(cx, "template <typename T> struct ", spelled, " // ", &entity.alias(), "\n{\n");

        common::storage(cx, entity);
        common::constructors(cx, entity);
        common::indexing(cx, entity);
        common::reductions(cx, entity);
        match entity {
            Entity::Vector(d) => vector::members(cx, d),
            Entity::Matrix { w, h } => {
                matrix::members(cx, w, h);
                factories::members(cx, w, h);
            }
        }
        common::multiply(cx, entity);

        cx.raw("};\n\n");
    }

    cx.close_section();
}

/// Full spelling of an entity's specialization: `vec<3, vec<2, T>>`.
fn spelling<E: Emitter>(cx: &mut GenContext<E>, entity: Entity, elem: &str) -> Token {
    match entity {
        Entity::Vector(d) => make!(cx, "vec<", d, ", ", elem, ">"),
        Entity::Matrix { w, h } => make!(cx, "vec<", w, ", vec<", h, ", ", elem, ">>"),
    }
}
