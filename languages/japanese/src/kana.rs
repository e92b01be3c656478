use std::collections::HashMap;
use std::sync::LazyLock;

/// Katakana chart, position-aligned with [`HIRAGANA_CHART`].
/// Semi-voiced forms like カ゚ are two chars (base + U+309A).
pub const KATAKANA_CHART: &str = "ァアィイゥウェエォオカガカ゚キギキ゚クグク゚ケゲケ゚コゴコ゚サザシジスズセゼソゾタダチヂッツヅテデトドナニヌネノハバパヒビピフブプヘベペホボポマミムメモャヤュユョヨラリルレロヮワヰヱヲンヴヵヶヽヾ";
pub const HIRAGANA_CHART: &str = "ぁあぃいぅうぇえぉおかがか゚きぎき゚くぐく゚けげけ゚こごこ゚さざしじすずせぜそぞただちぢっつづてでとどなにぬねのはばぱひびぴふぶぷへべぺほぼぽまみむめもゃやゅゆょよらりるれろゎわゐゑをんゔゕゖゝゞ";

static KATA_TO_HIRA: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| build_table(KATAKANA_CHART, HIRAGANA_CHART));

static HIRA_TO_KATA: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| build_table(HIRAGANA_CHART, KATAKANA_CHART));

fn build_table(from: &str, to: &str) -> HashMap<char, char> {
    from.chars().zip(to.chars()).collect()
}

fn translate(text: &str, table: &HashMap<char, char>) -> String {
    text.chars()
        .map(|c| table.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Convert katakana to hiragana (ウオジラミ → うおじらみ).
/// Characters outside the chart, such as ー, are kept as-is.
pub fn katakana_to_hiragana(text: &str) -> String {
    translate(text, &KATA_TO_HIRA)
}

/// Convert hiragana to katakana
pub fn hiragana_to_katakana(text: &str) -> String {
    translate(text, &HIRA_TO_KATA)
}
