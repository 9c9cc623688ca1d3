use std::collections::HashMap;

/// Best Indel similarity (0-100) between the shorter string and any
/// alignment of it against the longer one, including windows cut off by
/// either end of the text. Either side empty scores 0.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (needle, haystack) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let m = needle.len();
    let n = haystack.len();
    if m == 0 {
        return 0.0;
    }

    let lcs = Lcs::new(needle);
    let score = |window: &[char]| 2.0 * lcs.len(window) as f64 / (m + window.len()) as f64;

    let mut best = 0.0_f64;
    let full = (0..=n - m).map(|start| &haystack[start..start + m]);
    let head = (1..m).map(|len| &haystack[..len]);
    let tail = (1..m).map(|len| &haystack[n - len..]);

    for window in full.chain(head).chain(tail) {
        let s = score(window);
        if s > best {
            best = s;
            if best >= 1.0 {
                break;
            }
        }
    }

    best * 100.0
}

/// Longest common subsequence against a fixed needle.
/// Bit-parallel for needles up to 64 chars, row DP otherwise.
enum Lcs<'a> {
    Bits { masks: HashMap<char, u64>, width: usize },
    Table { needle: &'a [char] },
}

impl<'a> Lcs<'a> {
    fn new(needle: &'a [char]) -> Self {
        if needle.len() > 64 {
            return Self::Table { needle };
        }

        let mut masks: HashMap<char, u64> = HashMap::new();
        for (i, c) in needle.iter().enumerate() {
            *masks.entry(*c).or_default() |= 1u64 << i;
        }
        Self::Bits {
            masks,
            width: needle.len(),
        }
    }

    fn len(&self, window: &[char]) -> usize {
        match self {
            Self::Bits { masks, width } => {
                let mut s = u64::MAX;
                for c in window {
                    if let Some(&mask) = masks.get(c) {
                        let u = s & mask;
                        s = s.wrapping_add(u) | (s - u);
                    }
                }
                let used = if *width == 64 { u64::MAX } else { (1u64 << width) - 1 };
                (!s & used).count_ones() as usize
            }
            Self::Table { needle } => {
                let mut row = vec![0usize; window.len() + 1];
                for &a in needle.iter() {
                    let mut diag = 0;
                    for (j, &b) in window.iter().enumerate() {
                        let up = row[j + 1];
                        row[j + 1] = if a == b { diag + 1 } else { up.max(row[j]) };
                        diag = up;
                    }
                }
                row[window.len()]
            }
        }
    }
}
