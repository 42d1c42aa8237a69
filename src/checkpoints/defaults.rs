//! Compiled-in checkpoint tables per network.

use crate::network::NetworkType;

pub const MAINNET_CHECKPOINTS: &[(u64, &str)] = &[
    (1, "31c66763d4582a4de671222f2fa187969cacef1b5412628187d08beffc79516a"),
    (10000, "a4bf8ae33e0ea6d5eead5e5b5416a1e9b56a0c2c3b29f705410c0e1c91f5a3a2"),
    (25000, "567f1c20b0bb24b0909c3d8e185e59fae4637da0cbe3a040c675dc7490be7f79"),
    (50000, "2e70fbf835e8aff6d530b34106261dcaf89612506a1c8d2433cb24a71d9a3cbd"),
    (75000, "8cc7ff2e4564998add727d789f11dd98742df3e3b3a7eaf84af8d85d6445596a"),
    (100000, "45924d7f9288d8def0876c1b1b046c86cc19a1b738e08ec5e21ce3f548a2ffeb"),
    (125000, "4958a72d7cc088a28b7c8cd46d06f46737b8d93c7d737031de0a7030ec350484"),
    (150000, "1ef692b6df1d255611ab479ec5feb2a18b10284bb02210d4d32ef7d92796dc50"),
    (175000, "3c0bb4e13202699236f6de2a0b9ecfb13b18c89b855c9d47118c399c2e59b97f"),
    (200000, "f78b56ed7996372faed59a3369ba925eca64c26273e7646e85efc41558c6828d"),
    (225000, "9328d79e864442db23a68ab144ce23e79764628633f044e8b36fb9cdde5e7b15"),
    (250000, "ac9af86500e4bf1bd5f19909d545ba1dc9dd5b1b31cf948bf6009c707868d8ae"),
    (275000, "05411f5ce852b92645ae853dec72e0f797dfee417a6e3f84710bcb5b6b7c9e6e"),
    (300000, "d586fed0205d968798f2b0ff2e2d8c9f95e9e33600676351113ed487d511e0db"),
    (325000, "f12e9af6d9a426fd3a5f976428dd9834bd897a10da604330060fedb47266a071"),
    (350000, "6f897fa2c195235ae7bdb7b4706b5dddff459f9ba24883ddd2fdcc9559c25e49"),
    (375000, "53ce78a6129b6d42b45ac3525fafd414b83526269b246cadc5f9612c6aa3e82c"),
    (400000, "b3e88b8cb76103435453a592b8d4f72422ca4385b691e3c5a156445792d09a35"),
    (425000, "57b8a06d06f2539bd5b87fa86824444ad1bf04f7aac09b88f79071d7d352fae0"),
    (450000, "38dc6b0e7f487bf0b0cadac6482db77f5aba55763fa1e05f962b3b6ad0411c88"),
    (475000, "9e376c1d1875471f1c3f9d8632783cc18378336f952c07bd3ab94976cfce291d"),
    (500000, "1c19b0d07289f837fa4758768375847493ae59055535b2b22c2dd3edc2282dae"),
    (525000, "6fbfc94a0f54191d54516008d0c74d4150f0ff230221d3dd34eb715ce74a01b1"),
    (550000, "2f121ddfe1886561d40f19e0baa445cb6f40cbe517d961f2d72249e857df0f37"),
];

pub const TESTNET_CHECKPOINTS: &[(u64, &str)] = &[];

pub const STAGENET_CHECKPOINTS: &[(u64, &str)] = &[];

/// The seed table installed for `network`.
pub fn default_checkpoints(network: NetworkType) -> &'static [(u64, &'static str)] {
    match network {
        NetworkType::Mainnet => MAINNET_CHECKPOINTS,
        NetworkType::Testnet => TESTNET_CHECKPOINTS,
        NetworkType::Stagenet => STAGENET_CHECKPOINTS,
    }
}
