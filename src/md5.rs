pub const BLOCK_BYTE_LENGTH: usize = 64; // 512 bits = 64 Bytes
pub const OUTPUT_BYTE_LENGTH: usize = 16;

const INITIAL_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

const R: [usize; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22,
    5,  9, 14, 20, 5,  9, 14, 20, 5,  9, 14, 20, 5,  9, 14, 20,
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23,
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

fn s(n: usize, x: u32) -> u32 {
    (x << n) | (x >> (32 - n))
}

fn add_padding(message: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(message.len() + 72);
    padded.extend_from_slice(message);
    padded.push(0b10000000);

    while padded.len() % BLOCK_BYTE_LENGTH != 56 {
        padded.push(0b00000000);
    }

    // bit length as two consecutive little-endian words, low word first
    padded.extend_from_slice(&((message.len() as u32).wrapping_mul(8)).to_le_bytes());
    padded.extend_from_slice(&((message.len() >> 29) as u32).to_le_bytes());

    padded
}

fn compute_block(h: &mut [u32; 4], block: &[u8; 64]) {
    let mut w = [0u32; 16];
    for (i, w_i) in w.iter_mut().enumerate() {
        let mut buf: [u8; 4] = [0u8; 4];
        buf.copy_from_slice(&block[i * 4..i * 4 + 4]);
        *w_i = u32::from_le_bytes(buf);
    }

    let (mut a, mut b, mut c, mut d) = (h[0], h[1], h[2], h[3]);

    for j in 0..64 {
        let (f, g) = if j < 16 {
            ((b & c) | ((!b) & d), j)
        } else if j < 32 {
            ((d & b) | ((!d) & c), (5 * j + 1) % 16)
        } else if j < 48 {
            (b ^ c ^ d, (3 * j + 5) % 16)
        } else {
            (c ^ (b | (!d)), (7 * j) % 16)
        };

        let temp = d;
        d = c;
        c = b;
        b = b.wrapping_add(s(
            R[j],
            a.wrapping_add(f).wrapping_add(K[j]).wrapping_add(w[g]),
        ));
        a = temp;
    }

    h[0] = h[0].wrapping_add(a);
    h[1] = h[1].wrapping_add(b);
    h[2] = h[2].wrapping_add(c);
    h[3] = h[3].wrapping_add(d);
}

pub fn digest_from_bytes(message: &[u8]) -> [u8; OUTPUT_BYTE_LENGTH] {
    let padded = add_padding(message);
    let mut h = INITIAL_STATE;

    for block in padded.chunks_exact(BLOCK_BYTE_LENGTH) {
        compute_block(&mut h, block.try_into().unwrap());
    }

    let mut res = [0u8; OUTPUT_BYTE_LENGTH];

    res[0..4].copy_from_slice(&h[0].to_le_bytes());
    res[4..8].copy_from_slice(&h[1].to_le_bytes());
    res[8..12].copy_from_slice(&h[2].to_le_bytes());
    res[12..16].copy_from_slice(&h[3].to_le_bytes());

    res
}
