//! 算术运算
//!
//! 每个运算都是操作数的纯函数。定义域校验在这里完成，
//! 违反时返回 [`ArithmeticError`]。

use super::errors::ArithmeticError;

/// 对数近似的迭代次数
pub const LN_APPROX_ITERATIONS: f64 = 100_000.0;

/// 三角函数结果保留的小数位数
pub const TRIG_DECIMAL_PLACES: i32 = 4;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}

/// a 的 b 次幂
///
/// 负底数配小数指数得到 NaN，不做拒绝
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

/// a 的 b 次方根，即 a^(1/b)
pub fn root(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::ZeroRootIndex);
    }
    Ok(a.powf(1.0 / b))
}

/// 浮点取余，结果符号与被除数一致
pub fn modulus(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::ZeroModulusDivisor);
    }
    Ok(a % b)
}

/// 自然对数的固定迭代近似: ln(x) ≈ n·(x^(1/n) − 1)
pub fn ln_approx(x: f64) -> f64 {
    LN_APPROX_ITERATIONS * (x.powf(1.0 / LN_APPROX_ITERATIONS) - 1.0)
}

/// 以 b 为底 a 的对数，分子分母都用 [`ln_approx`]
///
/// 先校验真数，再校验底数
pub fn logarithm(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if a <= 0.0 {
        return Err(ArithmeticError::NonPositiveLogArgument);
    }
    if b <= 0.0 || b == 1.0 {
        return Err(ArithmeticError::InvalidLogBase);
    }
    Ok(ln_approx(a) / ln_approx(b))
}

/// 四舍五入到指定小数位
pub fn round_to(x: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (x * factor).round() / factor
}

/// 正弦（弧度），保留 4 位小数
pub fn sine(a: f64) -> f64 {
    round_to(a.sin(), TRIG_DECIMAL_PLACES)
}

/// 余弦（弧度），保留 4 位小数
pub fn cosine(a: f64) -> f64 {
    round_to(a.cos(), TRIG_DECIMAL_PLACES)
}

/// 浮点输入的阶乘：先向下取整，再做整数累乘
pub fn factorial(a: f64) -> Result<i64, ArithmeticError> {
    if !a.is_finite() {
        return Err(ArithmeticError::NonFiniteFactorial);
    }
    let n = a.floor();
    if n < 0.0 {
        return Err(ArithmeticError::NegativeFactorial);
    }
    // 超出 i64 的值会饱和，之后在累乘中溢出
    factorial_int(n as i64)
}

/// 整数阶乘 1·2·…·n，溢出 i64 时报错
pub fn factorial_int(n: i64) -> Result<i64, ArithmeticError> {
    if n < 0 {
        return Err(ArithmeticError::NegativeFactorial);
    }
    (1..=n).try_fold(1_i64, |acc, k| {
        acc.checked_mul(k).ok_or(ArithmeticError::FactorialOverflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_add_is_commutative() {
        let pairs = [(1.5, -2.25), (0.0, 7.0), (1e300, -3.0), (-0.1, 0.2)];
        for (a, b) in pairs {
            assert_eq!(add(a, b), add(b, a));
        }
    }

    #[test]
    fn test_basic_operations() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(subtract(2.0, 3.0), -1.0);
        assert_eq!(multiply(4.0, 2.5), 10.0);
        assert_eq!(power(2.0, 10.0), 1024.0);
    }

    #[test]
    fn test_power_negative_base_fractional_exponent_is_nan() {
        assert!(power(-8.0, 0.5).is_nan());
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(7.0, 2.0), Ok(3.5));
        assert_eq!(divide(1.0, 3.0), Ok(1.0 / 3.0));
        assert_eq!(divide(5.0, 0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(5.0, -0.0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn test_root() {
        let r = root(27.0, 3.0).unwrap();
        assert!((r - 3.0).abs() < EPS);
        assert!((root(16.0, 2.0).unwrap() - 4.0).abs() < EPS);
        assert_eq!(root(27.0, 0.0), Err(ArithmeticError::ZeroRootIndex));
    }

    #[test]
    fn test_even_root_of_negative_is_nan() {
        assert!(root(-4.0, 2.0).unwrap().is_nan());
    }

    #[test]
    fn test_modulus() {
        assert_eq!(modulus(10.0, 3.0), Ok(1.0));
        assert_eq!(modulus(5.5, 2.0), Ok(1.5));
        // 符号跟随被除数
        assert_eq!(modulus(-7.0, 3.0), Ok(-1.0));
        assert_eq!(modulus(7.0, -3.0), Ok(1.0));
        for a in [0.0, 1.0, -3.5, 1e10] {
            assert_eq!(modulus(a, 0.0), Err(ArithmeticError::ZeroModulusDivisor));
        }
    }

    #[test]
    fn test_logarithm_uses_approximation() {
        let r = logarithm(100.0, 10.0).unwrap();
        let expected = (100_000.0 * (100f64.powf(1.0 / 100_000.0) - 1.0))
            / (100_000.0 * (10f64.powf(1.0 / 100_000.0) - 1.0));
        assert_eq!(r, expected);
        assert!((r - 2.0).abs() < 1e-4);
        assert_ne!(r, 2.0);
    }

    #[test]
    fn test_ln_approx_close_to_ln() {
        for x in [0.5, 2.0, 10.0, 1000.0] {
            assert!((ln_approx(x) - x.ln()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_logarithm_validation() {
        assert_eq!(logarithm(0.0, 10.0), Err(ArithmeticError::NonPositiveLogArgument));
        assert_eq!(logarithm(-1.0, 2.0), Err(ArithmeticError::NonPositiveLogArgument));
        assert_eq!(logarithm(10.0, 1.0), Err(ArithmeticError::InvalidLogBase));
        assert_eq!(logarithm(10.0, 0.0), Err(ArithmeticError::InvalidLogBase));
        assert_eq!(logarithm(10.0, -2.0), Err(ArithmeticError::InvalidLogBase));
    }

    #[test]
    fn test_logarithm_checks_argument_before_base() {
        assert_eq!(logarithm(-1.0, 1.0), Err(ArithmeticError::NonPositiveLogArgument));
        assert_eq!(logarithm(-1.0, -5.0), Err(ArithmeticError::NonPositiveLogArgument));
    }

    #[test]
    fn test_trigonometry_rounded() {
        assert_eq!(sine(0.0), 0.0);
        assert_eq!(cosine(0.0), 1.0);
        assert_eq!(sine(std::f64::consts::FRAC_PI_2), 1.0);
        assert_eq!(sine(1.0), 0.8415);
        assert_eq!(cosine(1.0), 0.5403);
        assert_eq!(cosine(std::f64::consts::PI), -1.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 4), 1.2346);
        assert_eq!(round_to(-1.23454, 4), -1.2345);
        assert_eq!(round_to(2.0, 4), 2.0);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(5.0), Ok(120));
        assert_eq!(factorial(0.0), Ok(1));
        assert_eq!(factorial(1.0), Ok(1));
        assert_eq!(factorial(5.9), Ok(120));
        assert_eq!(factorial(20.0), Ok(2_432_902_008_176_640_000));
    }

    #[test]
    fn test_factorial_rejects_invalid_input() {
        assert_eq!(factorial(-1.0), Err(ArithmeticError::NegativeFactorial));
        assert_eq!(factorial(-0.5), Err(ArithmeticError::NegativeFactorial));
        assert_eq!(factorial(f64::NAN), Err(ArithmeticError::NonFiniteFactorial));
        assert_eq!(factorial(f64::INFINITY), Err(ArithmeticError::NonFiniteFactorial));
        assert_eq!(factorial(21.0), Err(ArithmeticError::FactorialOverflow));
        assert_eq!(factorial(1e300), Err(ArithmeticError::FactorialOverflow));
    }

    #[test]
    fn test_factorial_int() {
        assert_eq!(factorial_int(0), Ok(1));
        assert_eq!(factorial_int(6), Ok(720));
        assert_eq!(factorial_int(-3), Err(ArithmeticError::NegativeFactorial));
        assert_eq!(factorial_int(i64::MAX), Err(ArithmeticError::FactorialOverflow));
    }
}
