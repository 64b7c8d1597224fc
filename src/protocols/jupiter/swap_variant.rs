use once_cell::sync::Lazy;
use serde::Serialize;

use crate::core::binary_reader::{BinaryReader, BinaryReaderError};

use super::error::JupiterError;

/// Order side for order-book venues. Zero is Bid, any nonzero byte is Ask.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    #[inline]
    pub fn from_byte(value: u8) -> Self {
        if value == 0 {
            Self::Bid
        } else {
            Self::Ask
        }
    }

    #[inline]
    pub fn to_byte(self) -> u8 {
        match self {
            Self::Bid => 0,
            Self::Ask => 1,
        }
    }
}

/// Parameter block width per tag. Read-only after startup; every tag not
/// listed here carries no parameters.
static PARAM_WIDTH: Lazy<[u8; 256]> = Lazy::new(|| {
    let mut widths = [0u8; 256];
    for tag in [8usize, 12, 15, 16, 17, 18, 21, 23, 24, 27, 28, 39, 47, 58, 60, 61] {
        widths[tag] = 1;
    }
    widths[29] = 16;
    widths[33] = 4;
    widths[41] = 4;
    widths[42] = 3;
    widths[43] = 10;
    widths[44] = 5;
    widths[45] = 5;
    widths
});

/// One swap venue in a route plan, with its wire parameters.
///
/// The tag is the single byte preceding the parameter block; the parameter
/// layout is wholly determined by the tag. Tags outside the known catalog
/// decode to `Unknown` with no parameters.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub enum SwapVariant {
    Saber {},
    SaberAddDecimalsDeposit {},
    SaberAddDecimalsWithdraw {},
    TokenSwap {},
    Sencha {},
    Step {},
    Cropper {},
    Raydium {},
    Crema { a_to_b: bool },
    Lifinity {},
    Mercurial {},
    Cykura {},
    Serum { side: Side },
    MarinadeDeposit {},
    MarinadeUnstake {},
    Aldrin { side: Side },
    AldrinV2 { side: Side },
    Whirlpool { a_to_b: bool },
    Invariant { x_to_y: bool },
    Meteora {},
    #[serde(rename = "GooseFX")]
    GooseFx {},
    DeltaFi { stable: bool },
    Balansol {},
    MarcoPolo { x_to_y: bool },
    Dradex { side: Side },
    LifinityV2 {},
    RaydiumClmm {},
    Openbook { side: Side },
    Phoenix { side: Side },
    Symmetry { from_token_id: u64, to_token_id: u64 },
    TokenSwapV2 {},
    HeliumTreasuryManagementRedeemV0 {},
    StakeDexStakeWrappedSol {},
    StakeDexSwapViaStake { bridge_stake_seed: u32 },
    #[serde(rename = "GooseFXV2")]
    GooseFxV2 {},
    Perps {},
    PerpsAddLiquidity {},
    PerpsRemoveLiquidity {},
    MeteoraDlmm {},
    OpenBookV2 { side: Side },
    RaydiumClmmV2 {},
    StakeDexPrefundWithdrawStakeAndDepositStake { bridge_stake_seed: u32 },
    Clone { pool_index: u8, quantity_is_input: bool, quantity_is_collateral: bool },
    SanctumS {
        src_lst_value_calc_accs: u8,
        dst_lst_value_calc_accs: u8,
        src_lst_index: u32,
        dst_lst_index: u32,
    },
    SanctumSAddLiquidity { lst_value_calc_accs: u8, lst_index: u32 },
    SanctumSRemoveLiquidity { lst_value_calc_accs: u8, lst_index: u32 },
    #[serde(rename = "RaydiumCP")]
    RaydiumCp {},
    WhirlpoolSwapV2 { a_to_b: bool },
    OneIntro {},
    PumpdotfunWrappedBuy {},
    PumpdotfunWrappedSell {},
    PerpsV2 {},
    PerpsV2AddLiquidity {},
    PerpsV2RemoveLiquidity {},
    MoonshotWrappedBuy {},
    MoonshotWrappedSell {},
    StabbleStableSwap {},
    StabbleWeightedSwap {},
    Obric { x_to_y: bool },
    FoxBuyFromEstimatedCost {},
    FoxClaimPartial { is_y: bool },
    SolFi { is_quote_to_base: bool },
    Woofi {},
    PumpdotfunAmmBuy {},
    PumpdotfunAmmSell {},
    Unknown { tag: u8 },
}

impl SwapVariant {
    /// Byte width of the parameter block for a tag.
    #[inline]
    pub fn param_width(tag: u8) -> usize {
        PARAM_WIDTH[tag as usize] as usize
    }

    /// Decode the venue at `tag` whose parameter block starts at `offset`.
    /// Returns the variant and the number of parameter bytes consumed;
    /// never touches bytes beyond the declared block.
    pub fn decode(tag: u8, data: &[u8], offset: usize) -> Result<(Self, usize), JupiterError> {
        let width = Self::param_width(tag);
        let end = offset
            .checked_add(width)
            .filter(|end| *end <= data.len())
            .ok_or(BinaryReaderError::BufferOverflow {
                length: width,
                offset,
                buffer_len: data.len(),
            })?;

        let mut reader = BinaryReader::new(&data[offset..end]);
        let variant = match tag {
            0 => Self::Saber {},
            1 => Self::SaberAddDecimalsDeposit {},
            2 => Self::SaberAddDecimalsWithdraw {},
            3 => Self::TokenSwap {},
            4 => Self::Sencha {},
            5 => Self::Step {},
            6 => Self::Cropper {},
            7 => Self::Raydium {},
            8 => Self::Crema {
                a_to_b: reader.read_u8()? != 0,
            },
            9 => Self::Lifinity {},
            10 => Self::Mercurial {},
            11 => Self::Cykura {},
            12 => Self::Serum {
                side: Side::from_byte(reader.read_u8()?),
            },
            13 => Self::MarinadeDeposit {},
            14 => Self::MarinadeUnstake {},
            15 => Self::Aldrin {
                side: Side::from_byte(reader.read_u8()?),
            },
            16 => Self::AldrinV2 {
                side: Side::from_byte(reader.read_u8()?),
            },
            17 => Self::Whirlpool {
                a_to_b: reader.read_u8()? != 0,
            },
            18 => Self::Invariant {
                x_to_y: reader.read_u8()? != 0,
            },
            19 => Self::Meteora {},
            20 => Self::GooseFx {},
            21 => Self::DeltaFi {
                stable: reader.read_u8()? != 0,
            },
            22 => Self::Balansol {},
            23 => Self::MarcoPolo {
                x_to_y: reader.read_u8()? != 0,
            },
            24 => Self::Dradex {
                side: Side::from_byte(reader.read_u8()?),
            },
            25 => Self::LifinityV2 {},
            26 => Self::RaydiumClmm {},
            27 => Self::Openbook {
                side: Side::from_byte(reader.read_u8()?),
            },
            28 => Self::Phoenix {
                side: Side::from_byte(reader.read_u8()?),
            },
            29 => Self::Symmetry {
                from_token_id: reader.read_u64()?,
                to_token_id: reader.read_u64()?,
            },
            30 => Self::TokenSwapV2 {},
            31 => Self::HeliumTreasuryManagementRedeemV0 {},
            32 => Self::StakeDexStakeWrappedSol {},
            33 => Self::StakeDexSwapViaStake {
                bridge_stake_seed: reader.read_u32()?,
            },
            34 => Self::GooseFxV2 {},
            35 => Self::Perps {},
            36 => Self::PerpsAddLiquidity {},
            37 => Self::PerpsRemoveLiquidity {},
            38 => Self::MeteoraDlmm {},
            39 => Self::OpenBookV2 {
                side: Side::from_byte(reader.read_u8()?),
            },
            40 => Self::RaydiumClmmV2 {},
            41 => Self::StakeDexPrefundWithdrawStakeAndDepositStake {
                bridge_stake_seed: reader.read_u32()?,
            },
            42 => Self::Clone {
                pool_index: reader.read_u8()?,
                quantity_is_input: reader.read_u8()? != 0,
                quantity_is_collateral: reader.read_u8()? != 0,
            },
            43 => Self::SanctumS {
                src_lst_value_calc_accs: reader.read_u8()?,
                dst_lst_value_calc_accs: reader.read_u8()?,
                src_lst_index: reader.read_u32()?,
                dst_lst_index: reader.read_u32()?,
            },
            44 => Self::SanctumSAddLiquidity {
                lst_value_calc_accs: reader.read_u8()?,
                lst_index: reader.read_u32()?,
            },
            45 => Self::SanctumSRemoveLiquidity {
                lst_value_calc_accs: reader.read_u8()?,
                lst_index: reader.read_u32()?,
            },
            46 => Self::RaydiumCp {},
            47 => Self::WhirlpoolSwapV2 {
                a_to_b: reader.read_u8()? != 0,
            },
            48 => Self::OneIntro {},
            49 => Self::PumpdotfunWrappedBuy {},
            50 => Self::PumpdotfunWrappedSell {},
            51 => Self::PerpsV2 {},
            52 => Self::PerpsV2AddLiquidity {},
            53 => Self::PerpsV2RemoveLiquidity {},
            54 => Self::MoonshotWrappedBuy {},
            55 => Self::MoonshotWrappedSell {},
            56 => Self::StabbleStableSwap {},
            57 => Self::StabbleWeightedSwap {},
            58 => Self::Obric {
                x_to_y: reader.read_u8()? != 0,
            },
            59 => Self::FoxBuyFromEstimatedCost {},
            60 => Self::FoxClaimPartial {
                is_y: reader.read_u8()? != 0,
            },
            61 => Self::SolFi {
                is_quote_to_base: reader.read_u8()? != 0,
            },
            76 => Self::Woofi {},
            108 => Self::PumpdotfunAmmBuy {},
            109 => Self::PumpdotfunAmmSell {},
            other => Self::Unknown { tag: other },
        };

        Ok((variant, width))
    }

    /// The wire tag this variant decodes from.
    pub fn tag(&self) -> u8 {
        match self {
            Self::Saber {} => 0,
            Self::SaberAddDecimalsDeposit {} => 1,
            Self::SaberAddDecimalsWithdraw {} => 2,
            Self::TokenSwap {} => 3,
            Self::Sencha {} => 4,
            Self::Step {} => 5,
            Self::Cropper {} => 6,
            Self::Raydium {} => 7,
            Self::Crema { .. } => 8,
            Self::Lifinity {} => 9,
            Self::Mercurial {} => 10,
            Self::Cykura {} => 11,
            Self::Serum { .. } => 12,
            Self::MarinadeDeposit {} => 13,
            Self::MarinadeUnstake {} => 14,
            Self::Aldrin { .. } => 15,
            Self::AldrinV2 { .. } => 16,
            Self::Whirlpool { .. } => 17,
            Self::Invariant { .. } => 18,
            Self::Meteora {} => 19,
            Self::GooseFx {} => 20,
            Self::DeltaFi { .. } => 21,
            Self::Balansol {} => 22,
            Self::MarcoPolo { .. } => 23,
            Self::Dradex { .. } => 24,
            Self::LifinityV2 {} => 25,
            Self::RaydiumClmm {} => 26,
            Self::Openbook { .. } => 27,
            Self::Phoenix { .. } => 28,
            Self::Symmetry { .. } => 29,
            Self::TokenSwapV2 {} => 30,
            Self::HeliumTreasuryManagementRedeemV0 {} => 31,
            Self::StakeDexStakeWrappedSol {} => 32,
            Self::StakeDexSwapViaStake { .. } => 33,
            Self::GooseFxV2 {} => 34,
            Self::Perps {} => 35,
            Self::PerpsAddLiquidity {} => 36,
            Self::PerpsRemoveLiquidity {} => 37,
            Self::MeteoraDlmm {} => 38,
            Self::OpenBookV2 { .. } => 39,
            Self::RaydiumClmmV2 {} => 40,
            Self::StakeDexPrefundWithdrawStakeAndDepositStake { .. } => 41,
            Self::Clone { .. } => 42,
            Self::SanctumS { .. } => 43,
            Self::SanctumSAddLiquidity { .. } => 44,
            Self::SanctumSRemoveLiquidity { .. } => 45,
            Self::RaydiumCp {} => 46,
            Self::WhirlpoolSwapV2 { .. } => 47,
            Self::OneIntro {} => 48,
            Self::PumpdotfunWrappedBuy {} => 49,
            Self::PumpdotfunWrappedSell {} => 50,
            Self::PerpsV2 {} => 51,
            Self::PerpsV2AddLiquidity {} => 52,
            Self::PerpsV2RemoveLiquidity {} => 53,
            Self::MoonshotWrappedBuy {} => 54,
            Self::MoonshotWrappedSell {} => 55,
            Self::StabbleStableSwap {} => 56,
            Self::StabbleWeightedSwap {} => 57,
            Self::Obric { .. } => 58,
            Self::FoxBuyFromEstimatedCost {} => 59,
            Self::FoxClaimPartial { .. } => 60,
            Self::SolFi { .. } => 61,
            Self::Woofi {} => 76,
            Self::PumpdotfunAmmBuy {} => 108,
            Self::PumpdotfunAmmSell {} => 109,
            Self::Unknown { tag } => *tag,
        }
    }

    /// Append this variant's parameter block in canonical wire form.
    /// Boolean flags encode as 0/1.
    pub fn encode_params(&self, out: &mut Vec<u8>) {
        match self {
            Self::Crema { a_to_b }
            | Self::Whirlpool { a_to_b }
            | Self::WhirlpoolSwapV2 { a_to_b } => out.push(u8::from(*a_to_b)),
            Self::Serum { side }
            | Self::Aldrin { side }
            | Self::AldrinV2 { side }
            | Self::Dradex { side }
            | Self::Openbook { side }
            | Self::Phoenix { side }
            | Self::OpenBookV2 { side } => out.push(side.to_byte()),
            Self::Invariant { x_to_y } | Self::MarcoPolo { x_to_y } | Self::Obric { x_to_y } => {
                out.push(u8::from(*x_to_y))
            }
            Self::DeltaFi { stable } => out.push(u8::from(*stable)),
            Self::FoxClaimPartial { is_y } => out.push(u8::from(*is_y)),
            Self::SolFi { is_quote_to_base } => out.push(u8::from(*is_quote_to_base)),
            Self::Symmetry {
                from_token_id,
                to_token_id,
            } => {
                out.extend_from_slice(&from_token_id.to_le_bytes());
                out.extend_from_slice(&to_token_id.to_le_bytes());
            }
            Self::StakeDexSwapViaStake { bridge_stake_seed }
            | Self::StakeDexPrefundWithdrawStakeAndDepositStake { bridge_stake_seed } => {
                out.extend_from_slice(&bridge_stake_seed.to_le_bytes());
            }
            Self::Clone {
                pool_index,
                quantity_is_input,
                quantity_is_collateral,
            } => {
                out.push(*pool_index);
                out.push(u8::from(*quantity_is_input));
                out.push(u8::from(*quantity_is_collateral));
            }
            Self::SanctumS {
                src_lst_value_calc_accs,
                dst_lst_value_calc_accs,
                src_lst_index,
                dst_lst_index,
            } => {
                out.push(*src_lst_value_calc_accs);
                out.push(*dst_lst_value_calc_accs);
                out.extend_from_slice(&src_lst_index.to_le_bytes());
                out.extend_from_slice(&dst_lst_index.to_le_bytes());
            }
            Self::SanctumSAddLiquidity {
                lst_value_calc_accs,
                lst_index,
            }
            | Self::SanctumSRemoveLiquidity {
                lst_value_calc_accs,
                lst_index,
            } => {
                out.push(*lst_value_calc_accs);
                out.extend_from_slice(&lst_index.to_le_bytes());
            }
            _ => {}
        }
    }
}
