//! Advance widths of symbolic glyphs
//!
//! Widths are in staff units: one font em spans four of them.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// Staff units per font em
pub const STAFF_UNITS_PER_EM: f64 = 4.0;

#[rustfmt::skip]
const ADVANCES: &[(u32, f64)] = &[
    (0xE030, 0.16), (0xE031, 0.64), (0xE032, 0.92), (0xE033, 0.92),
    (0xE034, 0.16), (0xE036, 0.16), (0xE040, 1.348), (0xE041, 1.348),
    (0xE042, 2.22), (0xE043, 0.392), (0xE044, 0.16), (0xE045, 4.06),
    (0xE046, 4.06), (0xE047, 2.2), (0xE048, 2.76),
    (0xE050, 2.684), (0xE051, 2.684), (0xE052, 2.684), (0xE053, 2.684),
    (0xE054, 2.684), (0xE055, 2.684), (0xE05C, 2.796), (0xE05D, 2.796),
    (0xE060, 2.756), (0xE061, 2.756), (0xE062, 2.756), (0xE063, 2.756),
    (0xE064, 2.756), (0xE069, 1.0), (0xE06A, 1.0), (0xE06D, 2.0),
    (0xE07A, 2.756), (0xE07B, 2.756), (0xE07C, 2.796),
    (0xE080, 1.8), (0xE081, 1.22), (0xE082, 1.6), (0xE083, 1.5),
    (0xE084, 1.7), (0xE085, 1.5), (0xE086, 1.6), (0xE087, 1.6),
    (0xE088, 1.7), (0xE089, 1.6), (0xE08A, 1.7), (0xE08B, 1.7),
    (0xE08C, 1.4), (0xE08D, 1.08), (0xE08E, 1.5), (0xE094, 0.46),
    (0xE095, 0.46), (0xE09E, 1.5), (0xE09F, 1.5),
    (0xE0A0, 2.52), (0xE0A1, 2.52), (0xE0A2, 1.688), (0xE0A3, 1.18),
    (0xE0A4, 1.18), (0xE0A5, 1.18), (0xE0A6, 1.18), (0xE0A7, 1.16),
    (0xE0A8, 1.16), (0xE0A9, 1.16), (0xE0B3, 1.688), (0xE0B4, 1.688),
    (0xE0B5, 1.328), (0xE0B6, 1.328), (0xE0B7, 1.344), (0xE0B8, 1.344),
    (0xE0CE, 1.2), (0xE0D1, 1.16), (0xE0DB, 1.388), (0xE0DD, 1.36),
    (0xE0F5, 1.3), (0xE0FA, 1.7), (0xE0FB, 1.3),
    (0xE101, 1.24), (0xE102, 1.18), (0xE103, 1.18), (0xE104, 1.42),
    (0xE1B9, 1.2), (0xE1BB, 1.18), (0xE1BC, 1.18), (0xE1BD, 1.18),
    (0xE1C1, 1.6), (0xE1C2, 2.0), (0xE1C3, 2.0), (0xE1F0, 1.24),
    (0xE1F2, 1.18), (0xE1F3, 1.18), (0xE1F4, 1.18),
    (0xE220, 1.04), (0xE221, 1.04), (0xE222, 1.04), (0xE223, 1.04),
    (0xE240, 1.056), (0xE241, 1.224), (0xE242, 1.116), (0xE243, 1.216),
    (0xE244, 1.044), (0xE245, 1.224), (0xE246, 1.092), (0xE247, 1.224),
    (0xE248, 1.092), (0xE249, 1.224), (0xE24A, 1.092), (0xE24B, 1.224),
    (0xE260, 0.904), (0xE261, 0.672), (0xE262, 0.996), (0xE263, 0.988),
    (0xE264, 1.644), (0xE265, 1.348), (0xE266, 1.98), (0xE267, 2.156),
    (0xE268, 1.584), (0xE269, 1.896), (0xE26A, 0.54), (0xE26B, 0.54),
    (0xE26C, 0.5), (0xE26D, 0.5),
    (0xE270, 1.0), (0xE271, 1.34), (0xE272, 1.2), (0xE273, 1.32),
    (0xE274, 0.96), (0xE275, 1.196), (0xE276, 1.4), (0xE277, 1.5),
    (0xE280, 0.856), (0xE281, 1.64), (0xE282, 0.624), (0xE283, 1.584),
    (0xE284, 1.02), (0xE285, 1.096), (0xE300, 1.32), (0xE301, 1.32),
    (0xE302, 0.936), (0xE303, 0.936), (0xE306, 1.64), (0xE307, 1.368),
    (0xE4A0, 1.356), (0xE4A1, 1.356), (0xE4A2, 0.28), (0xE4A3, 0.28),
    (0xE4A4, 1.352), (0xE4A5, 1.352), (0xE4A6, 0.472), (0xE4A7, 0.472),
    (0xE4A8, 0.62), (0xE4A9, 0.62), (0xE4AA, 1.356), (0xE4AB, 1.356),
    (0xE4AC, 0.94), (0xE4AD, 0.94), (0xE4B2, 1.356), (0xE4B3, 1.356),
    (0xE4B4, 1.356), (0xE4B5, 1.356), (0xE4BA, 1.04), (0xE4BB, 1.04),
    (0xE4BC, 0.48), (0xE4BD, 0.48), (0xE4BE, 0.9), (0xE4BF, 0.9),
    (0xE4C0, 2.42), (0xE4C1, 2.42), (0xE4C2, 2.128), (0xE4C3, 2.128),
    (0xE4C4, 2.412), (0xE4C5, 2.412), (0xE4C6, 2.872), (0xE4C7, 2.872),
    (0xE4C8, 2.52), (0xE4C9, 2.52), (0xE4CA, 2.644), (0xE4CB, 2.644),
    (0xE4CE, 0.932), (0xE4CF, 0.932), (0xE4D1, 1.2), (0xE4D2, 1.2),
    (0xE4E0, 3.0), (0xE4E1, 1.4), (0xE4E2, 0.5), (0xE4E3, 1.128),
    (0xE4E4, 1.128), (0xE4E5, 1.08), (0xE4E6, 0.988), (0xE4E7, 1.28),
    (0xE4E8, 1.412), (0xE4E9, 1.544), (0xE4EA, 1.664), (0xE4EE, 3.0),
    (0xE4EF, 3.0), (0xE4F0, 3.0), (0xE4F1, 1.076), (0xE4F2, 0.784),
    (0xE4F3, 0.828),
    (0xE500, 1.7), (0xE501, 1.7), (0xE502, 1.7), (0xE503, 1.7),
    (0xE504, 1.7), (0xE505, 1.7), (0xE506, 1.7), (0xE507, 1.7),
    (0xE510, 4.864), (0xE511, 4.152), (0xE512, 4.916), (0xE513, 5.532),
    (0xE514, 6.348), (0xE515, 5.128), (0xE516, 4.152), (0xE517, 4.328),
    (0xE518, 4.916), (0xE519, 5.532), (0xE51A, 4.916), (0xE51B, 5.532),
    (0xE51C, 4.152),
    (0xE520, 1.452), (0xE521, 1.572), (0xE522, 1.392), (0xE523, 1.036),
    (0xE524, 0.876), (0xE525, 1.0), (0xE526, 1.1), (0xE527, 3.1),
    (0xE528, 2.6), (0xE529, 2.0), (0xE52A, 1.6), (0xE52B, 2.1),
    (0xE52C, 2.5), (0xE52D, 1.972), (0xE52E, 2.8), (0xE52F, 2.7),
    (0xE530, 2.2), (0xE531, 1.8), (0xE532, 2.5), (0xE533, 2.8),
    (0xE534, 3.2), (0xE535, 2.2), (0xE536, 2.6), (0xE537, 2.0),
    (0xE538, 2.8), (0xE539, 2.6), (0xE53A, 2.5), (0xE53B, 3.0),
    (0xE53C, 2.26), (0xE53D, 2.52), (0xE53E, 2.0),
    (0xE540, 6.0), (0xE541, 6.0),
    (0xE560, 0.5), (0xE561, 0.72), (0xE562, 0.72), (0xE566, 1.88),
    (0xE567, 1.64), (0xE568, 1.64), (0xE569, 1.64), (0xE56C, 1.9),
    (0xE56D, 1.9), (0xE56E, 1.68), (0xE56F, 1.68),
    (0xE5E5, 1.4), (0xE5E6, 1.4), (0xE5E7, 1.4),
    (0xE610, 1.32), (0xE612, 1.32), (0xE614, 1.0), (0xE618, 1.5),
    (0xE619, 1.5), (0xE61B, 1.36), (0xE61F, 1.2), (0xE620, 1.0),
    (0xE630, 1.0), (0xE631, 1.0), (0xE633, 1.0),
    (0xE650, 2.6), (0xE651, 1.0), (0xE655, 1.3), (0xE658, 1.3),
    (0xE65C, 1.3), (0xE65D, 1.3),
    (0xE6A1, 0.2), (0xE6A2, 0.2),
    (0xE880, 0.76), (0xE881, 0.56), (0xE882, 0.72), (0xE883, 0.76),
    (0xE884, 0.8), (0xE885, 0.76), (0xE886, 0.76), (0xE887, 0.72),
    (0xE888, 0.76), (0xE889, 0.76), (0xE88A, 0.6), (0xE88B, 0.6),
    (0xE8E0, 1.2), (0xE8E1, 1.2), (0xE8E2, 1.2), (0xE8E3, 1.2),
    (0xE900, 1.5), (0xE901, 1.5),
    (0xEA50, 2.0), (0xEA51, 2.0), (0xEA52, 2.0),
    (0xEB90, 1.4), (0xEB91, 1.4),
    (0xEC52, 1.6), (0xEC53, 1.6), (0xEC54, 1.6),
    (0xED50, 1.4), (0xED51, 1.4), (0xED52, 1.4),
];

fn table() -> &'static FxHashMap<u32, f64> {
    static TABLE: OnceLock<FxHashMap<u32, f64>> = OnceLock::new();
    TABLE.get_or_init(|| ADVANCES.iter().copied().collect())
}

/// Advance width of `glyph` in staff units, if known
pub fn advance(glyph: char) -> Option<f64> {
    table().get(&(glyph as u32)).copied()
}

/// Number of glyphs in the table
pub fn len() -> usize {
    table().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_glyphs() {
        assert_eq!(advance('\u{E050}'), Some(2.684));
        assert_eq!(advance('\u{E0A4}'), Some(1.18));
        assert_eq!(advance('\u{E262}'), Some(0.996));
    }

    #[test]
    fn test_unknown_glyphs() {
        assert_eq!(advance('\u{E000}'), None);
        assert_eq!(advance('a'), None);
    }

    #[test]
    fn test_table_has_no_duplicate_code_points() {
        assert_eq!(len(), ADVANCES.len());
    }
}
