//! Toom-Cook 4-way multiplication in Z_{2^16}[X]/(X^256 + 1)
//!
//! The 256-coefficient operands are split into four 64-coefficient limbs,
//! evaluated at seven points, multiplied with two levels of Karatsuba and
//! interpolated back. Interpolation divides by 2, 3, 8, 9 and 15; division
//! by the odd factors uses inverses modulo 2^16 and the shifts lose the top
//! three bits, so products are exact modulo 2^13 and therefore modulo every
//! Saber modulus. Every loop runs a fixed number of times.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::params::RING_DEGREE;

/// Limb length after the 4-way split
const LIMB: usize = RING_DEGREE / 4;

/// Length of a limb product
const LIMB_PRODUCT: usize = 2 * LIMB - 1;

/// 3^-1 mod 2^16
const INV3: i32 = 43691;
/// 9^-1 mod 2^16
const INV9: i32 = 36409;
/// 15^-1 mod 2^16
const INV15: i32 = 61167;

/// Two-level Karatsuba product of two 64-coefficient limbs.
fn karatsuba_simple(a: &[u16; LIMB], b: &[u16; LIMB]) -> [u16; LIMB_PRODUCT] {
    const Q4: usize = LIMB / 4;

    let mut d01 = [0u16; LIMB / 2 - 1];
    let mut d0123 = [0u16; LIMB / 2 - 1];
    let mut d23 = [0u16; LIMB / 2 - 1];
    let mut result_d01 = [0u16; LIMB - 1];
    let mut result = [0u16; LIMB_PRODUCT];

    for i in 0..Q4 {
        let a0 = a[i];
        let a1 = a[i + Q4];
        let a2 = a[i + 2 * Q4];
        let a3 = a[i + 3 * Q4];
        let a01 = a0.wrapping_add(a1);
        let a23 = a2.wrapping_add(a3);
        let a02 = a0.wrapping_add(a2);
        let a13 = a1.wrapping_add(a3);
        let a0123 = a02.wrapping_add(a13);

        for j in 0..Q4 {
            let b0 = b[j];
            let b1 = b[j + Q4];
            let b2 = b[j + 2 * Q4];
            let b3 = b[j + 3 * Q4];
            let k = i + j;

            result[k] = result[k].wrapping_add(a0.wrapping_mul(b0));
            result[k + 2 * Q4] = result[k + 2 * Q4].wrapping_add(a1.wrapping_mul(b1));
            d01[k] = d01[k].wrapping_add(a01.wrapping_mul(b0.wrapping_add(b1)));

            result[k + 4 * Q4] = result[k + 4 * Q4].wrapping_add(a2.wrapping_mul(b2));
            result[k + 6 * Q4] = result[k + 6 * Q4].wrapping_add(a3.wrapping_mul(b3));
            d23[k] = d23[k].wrapping_add(a23.wrapping_mul(b2.wrapping_add(b3)));

            let b02 = b0.wrapping_add(b2);
            let b13 = b1.wrapping_add(b3);
            result_d01[k] = result_d01[k].wrapping_add(a02.wrapping_mul(b02));
            result_d01[k + 2 * Q4] = result_d01[k + 2 * Q4].wrapping_add(a13.wrapping_mul(b13));
            d0123[k] = d0123[k].wrapping_add(a0123.wrapping_mul(b02.wrapping_add(b13)));
        }
    }

    for i in 0..LIMB / 2 - 1 {
        d0123[i] = d0123[i]
            .wrapping_sub(result_d01[i])
            .wrapping_sub(result_d01[i + 2 * Q4]);
        d01[i] = d01[i]
            .wrapping_sub(result[i])
            .wrapping_sub(result[i + 2 * Q4]);
        d23[i] = d23[i]
            .wrapping_sub(result[i + 4 * Q4])
            .wrapping_sub(result[i + 6 * Q4]);
    }

    for i in 0..LIMB / 2 - 1 {
        result_d01[i + Q4] = result_d01[i + Q4].wrapping_add(d0123[i]);
        result[i + Q4] = result[i + Q4].wrapping_add(d01[i]);
        result[i + 5 * Q4] = result[i + 5 * Q4].wrapping_add(d23[i]);
    }

    for i in 0..LIMB - 1 {
        result_d01[i] = result_d01[i]
            .wrapping_sub(result[i])
            .wrapping_sub(result[i + LIMB]);
    }

    for i in 0..LIMB - 1 {
        result[i + LIMB / 2] = result[i + LIMB / 2].wrapping_add(result_d01[i]);
    }

    d01.zeroize();
    d0123.zeroize();
    d23.zeroize();
    result_d01.zeroize();
    result
}

/// Evaluate the four limbs of `x` at 0, ±1, ±2 (scaled), 1/2 (scaled) and ∞.
fn evaluate(x: &[u16; RING_DEGREE], w: &mut [[u16; LIMB]; 7]) {
    for j in 0..LIMB {
        let r0 = x[j];
        let r1 = x[j + LIMB];
        let r2 = x[j + 2 * LIMB];
        let r3 = x[j + 3 * LIMB];

        let r4 = r0.wrapping_add(r2);
        let r5 = r1.wrapping_add(r3);
        w[2][j] = r4.wrapping_add(r5);
        w[3][j] = r4.wrapping_sub(r5);

        let r4 = (r0 << 2).wrapping_add(r2) << 1;
        let r5 = (r1 << 2).wrapping_add(r3);
        w[4][j] = r4.wrapping_add(r5);
        w[5][j] = r4.wrapping_sub(r5);

        w[1][j] = (r3 << 3)
            .wrapping_add(r2 << 2)
            .wrapping_add(r1 << 1)
            .wrapping_add(r0);
        w[6][j] = r0;
        w[0][j] = r3;
    }
}

/// Point evaluations of both operands and their pointwise limb products.
///
/// Either operand may be secret, so the whole workspace is wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
struct Workspace {
    aw: [[u16; LIMB]; 7],
    bw: [[u16; LIMB]; 7],
    w: [[u16; LIMB_PRODUCT]; 7],
}

impl Workspace {
    fn new(a: &[u16; RING_DEGREE], b: &[u16; RING_DEGREE]) -> Self {
        let mut ws = Self {
            aw: [[0u16; LIMB]; 7],
            bw: [[0u16; LIMB]; 7],
            w: [[0u16; LIMB_PRODUCT]; 7],
        };
        evaluate(a, &mut ws.aw);
        evaluate(b, &mut ws.bw);
        for k in 0..7 {
            ws.w[k] = karatsuba_simple(&ws.aw[k], &ws.bw[k]);
        }
        ws
    }
}

/// Full (unreduced) product of two degree-255 polynomials, 512 coefficients.
pub fn toom_cook_4way(a: &[u16; RING_DEGREE], b: &[u16; RING_DEGREE]) -> [u16; 2 * RING_DEGREE] {
    let ws = Workspace::new(a, b);
    let w = &ws.w;

    let mut c = [0u16; 2 * RING_DEGREE];
    for i in 0..LIMB_PRODUCT {
        let r0 = w[0][i] as i32;
        let mut r1 = w[1][i] as i32;
        let mut r2 = w[2][i] as i32;
        let mut r3 = w[3][i] as i32;
        let mut r4 = w[4][i] as i32;
        let mut r5 = w[5][i] as i32;
        let r6 = w[6][i] as i32;

        r1 = (r1 + r4) & 0xffff;
        r5 = (r5 - r4) & 0xffff;
        r3 = ((r3 - r2) >> 1) & 0xffff;
        r4 = (r4 - r0) & 0xffff;
        r4 = (r4 - (r6 << 6)) & 0xffff;
        r4 = ((r4 << 1) + r5) & 0xffff;
        r2 = (r2 + r3) & 0xffff;
        r1 = (r1 - (r2 << 6) - r2) & 0xffff;
        r2 = (r2 - r6) & 0xffff;
        r2 = (r2 - r0) & 0xffff;
        r1 = (r1 + 45 * r2) & 0xffff;
        r4 = ((r4 - (r2 << 3)).wrapping_mul(INV3) >> 3) & 0xffff;
        r5 = (r5 + r1) & 0xffff;
        r1 = ((r1 + (r3 << 4)).wrapping_mul(INV9) >> 1) & 0xffff;
        r3 = (-(r3 + r1)) & 0xffff;
        r5 = ((30 * r1 - r5).wrapping_mul(INV15) >> 2) & 0xffff;
        r2 = (r2 - r4) & 0xffff;
        r1 = (r1 - r5) & 0xffff;

        let parts = [r6, r5, r4, r3, r2, r1, r0];
        for (k, part) in parts.iter().enumerate() {
            let idx = i + k * LIMB;
            c[idx] = c[idx].wrapping_add(*part as u16);
        }
    }
    c
}

/// `res += a * b` in Z_{2^16}[X]/(X^256 + 1), exact modulo 2^13.
pub fn poly_mul_acc(a: &[u16; RING_DEGREE], b: &[u16; RING_DEGREE], res: &mut [u16; RING_DEGREE]) {
    let mut c = toom_cook_4way(a, b);
    for i in 0..RING_DEGREE {
        res[i] = res[i].wrapping_add(c[i]).wrapping_sub(c[i + RING_DEGREE]);
    }
    c.zeroize();
}
