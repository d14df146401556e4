use company_matcher_common::Error;

/// 既定の候補数
pub const DEFAULT_TOP_K: usize = 5;

/// 1件あたりに返す候補数（1以上）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TopK(usize);

impl TopK {
    /// 呼び出し側の値を検証する（0以下は設定エラー）
    pub fn new(k: i64) -> Result<Self, Error> {
        if k <= 0 {
            return Err(Error::InvalidTopK(k));
        }
        Ok(Self(k as usize))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for TopK {
    fn default() -> Self {
        Self(DEFAULT_TOP_K)
    }
}

impl std::str::FromStr for TopK {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let k: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("topk must be an integer: {}", s))?;
        TopK::new(k).map_err(|e| e.to_string())
    }
}

impl std::fmt::Display for TopK {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
