//! Chained encrypt/decrypt stress runs across every permitted key size and
//! message lengths 8, 64, 512 and 4096 numerals.

use radix_ff1::{numeral, FF1};

#[test]
fn chained_round_trips() {
    let ff1 = FF1::new(10, 8).unwrap();

    for key_bits in [128_usize, 192, 256] {
        let key: Vec<u8> = (0..key_bits / 8).map(|i| i as u8).collect();

        let mut pt: Vec<u16> = vec![(key_bits % 10) as u16];
        for _ in 0..4 {
            // make the message eight times longer: 1 -> 8 -> 64 -> 512 -> 4096
            pt = [pt.as_slice(), pt.as_slice()].concat();
            pt = [pt.as_slice(), pt.as_slice()].concat();
            pt = [pt.as_slice(), pt.as_slice()].concat();

            // run four chained iterations per length, each under a fresh tweak,
            // feeding the ciphertext back in as the next plaintext
            for i in 0..4_u64 {
                let tweak = numeral::bytestring(i, 8).unwrap();
                let ct = ff1.encrypt(&key, &tweak, &pt).unwrap();
                assert_eq!(ct.len(), pt.len());
                assert_eq!(ff1.decrypt(&key, &tweak, &ct).unwrap(), pt);
                pt = ct;
            }
        }
    }
}
