//! 類似度スコア（編集距離ベース）

/// 2つの正規化済みキーの類似度を 0〜100 で返す（小数点以下2桁に丸め）
///
/// `(1 - 距離 / (len(a) + len(b))) * 100`。長さはUnicodeコードポイント数。
/// 両方空なら100、片方だけ空なら0。
pub fn score(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();

    if total == 0 {
        return 100.0;
    }

    let distance = levenshtein_distance(&a_chars, &b_chars);
    let ratio = 1.0 - (distance as f64 / total as f64);

    round2(ratio * 100.0).clamp(0.0, 100.0)
}

/// 小数点以下2桁に丸める（ちょうど中間なら偶数側）
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// レーベンシュタイン距離を計算（挿入・削除・置換すべてコスト1）
pub fn levenshtein_distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // 2行分だけ保持する
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
