//! The quaternion type.
//!
//! Rotation conversions assume a unit quaternion; nothing enforces it.

use mathgen_emit::Emitter;

use crate::render::rows;
use crate::{out, GenContext};

/// Hamilton product `this * o`, one expression per slot.
const HAMILTON: [&str; 4] = [
    "w * o.x + x * o.w + y * o.z - z * o.y",
    "w * o.y - x * o.z + y * o.w + z * o.x",
    "w * o.z + x * o.y - y * o.x + z * o.w",
    "w * o.w - x * o.x - y * o.y - z * o.z",
];

/// Rotation matrix of a unit quaternion, row-major.
const ROTATION: [&str; 9] = [
    "1 - 2 * (y * y + z * z)",
    "2 * (x * y - z * w)",
    "2 * (x * z + y * w)",
    "2 * (x * y + z * w)",
    "1 - 2 * (x * x + z * z)",
    "2 * (y * z - x * w)",
    "2 * (x * z - y * w)",
    "2 * (y * z + x * w)",
    "1 - 2 * (x * x + y * y)",
];

const HEAD: &str = "template <typename T> struct quat
{
    using type = quat;
    using base_type = T;
    using vec3_t = vec3<T>;
    using vec4_t = vec4<T>;
    using mat3_t = mat3<T>;
    using mat4_t = mat4<T>;

    base_type x = 0, y = 0, z = 0, w = 1;

    constexpr quat() = default;
    constexpr quat(base_type p_x, base_type p_y, base_type p_z, base_type p_w) : x(p_x), y(p_y), z(p_z), w(p_w) {}
    explicit constexpr quat(const vec4_t &vec) : x(vec.x), y(vec.y), z(vec.z), w(vec.w) {}
    quat(const vec3_t &axis, base_type angle) : quat(with_normalized_axis(axis.norm(), angle)) {}

    [[nodiscard]] static quat with_normalized_axis(const vec3_t &axis, base_type angle)
    {
        angle /= 2;
        base_type c = std::cos(angle);
        base_type s = std::sin(angle);
        return {axis.x * s, axis.y * s, axis.z * s, c};
    }

    [[nodiscard]] constexpr vec4_t as_vec() const {return {x, y, z, w};}
    [[nodiscard]] constexpr vec3_t xyz() const {return {x, y, z};}
    [[nodiscard]] vec3_t axis_norm() const {return xyz().norm();}
    [[nodiscard]] base_type angle() const {return 2 * std::atan2(xyz().len(), w);}
    [[nodiscard]] quat norm() const {return quat(as_vec().norm());}
    [[nodiscard]] constexpr quat inverse() const {return {-x, -y, -z, w};}

";

const TAIL: &str = "    [[nodiscard]] constexpr mat4_t make_mat4() const {return make_mat3().to_mat4();}

    template <typename TT> [[nodiscard]] constexpr vec3<larger_t<T, TT>> operator*(const vec3<TT> &v) const {return make_mat3().mul(v);}
    template <typename TT> [[nodiscard]] constexpr vec4<larger_t<T, TT>> operator*(const vec4<TT> &v) const {return (*this * v.to_vec3()).to_vec4(v.w);}
};

// Linear blend of the components, renormalized: the result is a unit quaternion.
template <typename T> [[nodiscard]] quat<T> lerp(const quat<T> &a, const quat<T> &b, T factor)
{
    return quat<T>((a.as_vec() * (1 - factor) + b.as_vec() * factor).norm());
}
";

pub fn emit<E: Emitter>(cx: &mut GenContext<E>) {
    for name in ["quat", "vec3", "vec4", "mat3", "mat4", "larger_t"] {
        cx.require(name);
    }
    cx.banner("Quaternion");
    cx.open_section("Quaternion");

    cx.raw(HEAD);

    let product = HAMILTON.map(str::to_owned);
    out!(
        cx,
        "template <typename TT> [[nodiscard]] constexpr quat<larger_t<T, TT>> operator*(const quat<TT> &o) const\n{\n",
        "return {",
        &rows(&product, 1),
        "};\n}\n\n"
    );

    let rotation = ROTATION.map(str::to_owned);
    out!(
        cx,
        "[[nodiscard]] constexpr mat3_t make_mat3() const\n{\n",
        "return mat3_t(",
        &rows(&rotation, 3),
        ");\n}\n"
    );

    cx.raw(TAIL);
    cx.declare("lerp");

    cx.close_section();
}
